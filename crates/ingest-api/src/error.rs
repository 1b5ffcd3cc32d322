//! Error types for the ingest pipeline contract
//!
//! Covers the failures a host sees from transformers:
//! - Construction (bad transformer configuration, unknown transformer)
//! - Streaming (records the transformer cannot handle)

/// Errors surfaced to the host pipeline
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Record kind the transformer does not recognise; fatal to the stream
    #[error("unsupported record kind: {kind}")]
    UnsupportedRecordKind {
        /// Runtime kind name of the offending record
        kind: String,
    },

    /// Transformer rejected its configuration at construction time
    #[error("invalid configuration for transformer '{transformer}': {source}")]
    Configuration {
        /// Registered transformer name
        transformer: String,
        /// Underlying configuration error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No factory registered under the requested name
    #[error("no transformer registered under name: '{0}'")]
    UnknownTransformer(String),
}

impl PipelineError {
    /// Create unsupported record kind error
    pub fn unsupported_kind(kind: impl Into<String>) -> Self {
        Self::UnsupportedRecordKind { kind: kind.into() }
    }

    /// Wrap a transformer-specific configuration error
    pub fn configuration(
        transformer: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Configuration {
            transformer: transformer.into(),
            source: Box::new(source),
        }
    }

    /// Check if error happened while building a transformer
    #[inline]
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::UnknownTransformer(_))
    }
}

/// Result type alias for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, thiserror::Error)]
    #[error("bad field")]
    struct FieldError;

    #[test]
    fn unsupported_kind_display() {
        let err = PipelineError::unsupported_kind("MetadataChangeEvent");
        assert_eq!(err.to_string(), "unsupported record kind: MetadataChangeEvent");
        assert!(!err.is_configuration());
    }

    #[test]
    fn configuration_keeps_source() {
        let err = PipelineError::configuration("rename_urn", FieldError);
        assert!(err.is_configuration());
        assert!(err.to_string().contains("rename_urn"));
        assert_eq!(err.source().map(ToString::to_string), Some("bad field".to_string()));
    }

    #[test]
    fn unknown_transformer_display() {
        let err = PipelineError::UnknownTransformer("nope".to_string());
        assert_eq!(err.to_string(), "no transformer registered under name: 'nope'");
        assert!(err.is_configuration());
    }
}
