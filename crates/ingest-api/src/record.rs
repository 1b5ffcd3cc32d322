//! Record kinds carried by pipeline envelopes
//!
//! The set is closed: transformers dispatch with an exhaustive `match` and
//! treat [`Record::Unsupported`] as the "no matching kind" case.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Change type of a metadata change proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeType {
    /// Insert or overwrite the aspect
    #[default]
    Upsert,
    /// Create the aspect, failing if it exists
    Create,
    /// Update an existing aspect
    Update,
    /// Delete the aspect
    Delete,
    /// Apply a JSON patch to the aspect
    Patch,
    /// Re-emit the stored aspect unchanged
    Restate,
}

impl Display for ChangeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Upsert => "UPSERT",
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Restate => "RESTATE",
        };
        f.write_str(s)
    }
}

/// Proposed change to one aspect of one metadata entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataChangeProposal {
    /// Entity type, e.g. `dataset`
    pub entity_type: String,
    /// Identifier of the entity the change applies to
    pub entity_urn: String,
    /// Kind of change
    #[serde(default)]
    pub change_type: ChangeType,
    /// Aspect being changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_name: Option<String>,
    /// Aspect payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect: Option<serde_json::Value>,
    /// Run and provenance bookkeeping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_metadata: Option<serde_json::Value>,
}

impl MetadataChangeProposal {
    /// Create an UPSERT proposal for an entity
    #[inline]
    #[must_use]
    pub fn new(entity_type: impl Into<String>, entity_urn: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            entity_urn: entity_urn.into(),
            change_type: ChangeType::Upsert,
            aspect_name: None,
            aspect: None,
            system_metadata: None,
        }
    }

    /// With change type
    #[inline]
    #[must_use]
    pub fn with_change_type(mut self, change_type: ChangeType) -> Self {
        self.change_type = change_type;
        self
    }

    /// With aspect name and payload
    #[inline]
    #[must_use]
    pub fn with_aspect(mut self, name: impl Into<String>, aspect: serde_json::Value) -> Self {
        self.aspect_name = Some(name.into());
        self.aspect = Some(aspect);
        self
    }
}

/// Pipeline control signal, e.g. a commit point
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRecord {
    /// Free-form signal label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ControlRecord {
    /// Create a labelled control record
    #[inline]
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
        }
    }
}

/// Marks the end of a record stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndOfStream;

/// A record flowing through the pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// Metadata change proposal; carries an entity URN
    ChangeProposal(MetadataChangeProposal),
    /// Control signal
    Control(ControlRecord),
    /// End-of-stream marker
    EndOfStream(EndOfStream),
    /// Any record kind the pipeline contract does not model
    Unsupported {
        /// Runtime kind name reported by the producer
        kind: String,
    },
}

impl Record {
    /// Stable kind name for errors and logs
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::ChangeProposal(_) => "MetadataChangeProposal",
            Self::Control(_) => "ControlRecord",
            Self::EndOfStream(_) => "EndOfStream",
            Self::Unsupported { kind } => kind,
        }
    }

    /// Entity URN, when the record carries one
    #[inline]
    #[must_use]
    pub fn entity_urn(&self) -> Option<&str> {
        match self {
            Self::ChangeProposal(mcp) => Some(&mcp.entity_urn),
            _ => None,
        }
    }

    /// Catch-all for a kind outside the contract
    #[inline]
    #[must_use]
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::Unsupported { kind: kind.into() }
    }
}

impl From<MetadataChangeProposal> for Record {
    fn from(mcp: MetadataChangeProposal) -> Self {
        Self::ChangeProposal(mcp)
    }
}

impl From<ControlRecord> for Record {
    fn from(control: ControlRecord) -> Self {
        Self::Control(control)
    }
}

impl From<EndOfStream> for Record {
    fn from(marker: EndOfStream) -> Self {
        Self::EndOfStream(marker)
    }
}
