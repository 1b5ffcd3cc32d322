//! Error types for the URN rename transformer
//!
//! Everything here surfaces at construction time. Streaming failures use
//! [`ingest_api::PipelineError`].

use crate::urn::ExtractionError;

/// Guidance appended to every missing-prefix error
pub const URN_EXAMPLES_HINT: &str = "Typical dataset URNs look like \
`urn:li:dataset:(urn:li:dataPlatform:s3,bucket/mytable,PROD)` or \
`urn:li:dataset:(urn:li:dataPlatform:snowflake,analytics.public.order_details,PROD)`. \
If you're trying to understand how to build a particular type of URN, you can pull up \
an existing entity in the web UI and see the URN in the URL bar.";

/// Rename configuration rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A URN field does not start with `urn:li:`
    #[error("{field} must be a URN that starts with `urn:li:`, got {value:?}. ({hint})", hint = URN_EXAMPLES_HINT)]
    MissingPrefix {
        /// Offending field, e.g. `new_urn` or `rename_specs[2].old_urn`
        field: String,
        /// Value as given
        value: String,
    },

    /// Old and new URN of a rule name different entity types
    #[error("old_urn and new_urn must have the same entity type, got {old_type:?} and {new_type:?}")]
    EntityTypeMismatch {
        /// Type prefix of `old_urn`
        old_type: String,
        /// Type prefix of `new_urn`
        new_type: String,
    },

    /// Type token could not be extracted from a prefixed URN
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Neither `new_urn` nor `rename_specs` is set
    #[error("rename config must set one of `new_urn` or `rename_specs`")]
    NoRenameTarget,

    /// Both `new_urn` and `rename_specs` are set
    #[error("rename config must set only one of `new_urn` or `rename_specs`, not both")]
    ConflictingRenameTargets,

    /// Config has the wrong shape (unknown key, wrong value type, bad YAML)
    #[error("malformed rename config: {0}")]
    Malformed(String),
}

impl ConfigError {
    /// Create missing prefix error for a field
    pub fn missing_prefix(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MissingPrefix {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Qualify a field-level error with the rule position it came from
    #[must_use]
    pub fn in_rule(self, index: usize) -> Self {
        match self {
            Self::MissingPrefix { field, value } => Self::MissingPrefix {
                field: format!("rename_specs[{index}].{field}"),
                value,
            },
            other => other,
        }
    }

    /// Check if error indicates a validator defect rather than bad input
    #[inline]
    #[must_use]
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::Extraction(_))
    }
}

/// Result type alias for rename configuration
pub type ConfigResult<T> = Result<T, ConfigError>;
