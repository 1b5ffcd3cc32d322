//! Record envelopes
//!
//! An envelope owns one record and its metadata for a single pass through
//! the pipeline. Transformers rewrite it in place and hand the same value on.

use crate::record::Record;
use std::collections::HashMap;

/// Metadata key holding the human-readable workunit label
pub const WORKUNIT_ID_KEY: &str = "workunit_id";

/// Envelope metadata mapping
pub type Metadata = HashMap<String, serde_json::Value>;

/// One record plus its metadata
#[derive(Debug, Clone, PartialEq)]
pub struct RecordEnvelope {
    /// The wrapped record
    pub record: Record,
    /// Associated metadata; keys are unique
    pub metadata: Metadata,
}

impl RecordEnvelope {
    /// Wrap a record with empty metadata
    #[inline]
    #[must_use]
    pub fn new(record: impl Into<Record>) -> Self {
        Self {
            record: record.into(),
            metadata: Metadata::new(),
        }
    }

    /// With metadata entry
    #[inline]
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// With workunit label
    #[inline]
    #[must_use]
    pub fn with_workunit_id(self, workunit_id: impl Into<String>) -> Self {
        self.with_metadata(WORKUNIT_ID_KEY, workunit_id.into())
    }

    /// Workunit label, if present and a string
    #[inline]
    #[must_use]
    pub fn workunit_id(&self) -> Option<&str> {
        self.metadata.get(WORKUNIT_ID_KEY).and_then(serde_json::Value::as_str)
    }

    /// Mutable workunit label, if present and a string
    pub fn workunit_id_mut(&mut self) -> Option<&mut String> {
        match self.metadata.get_mut(WORKUNIT_ID_KEY) {
            Some(serde_json::Value::String(label)) => Some(label),
            _ => None,
        }
    }
}
