//! Rename configuration and its validation
//!
//! Two shapes are accepted:
//!
//! ```yaml
//! # rename every change proposal to one URN
//! new_urn: "urn:li:dataset:(urn:li:dataPlatform:s3,bucket/table,PROD)"
//! ```
//!
//! ```yaml
//! # ordered old → new rules, first match wins
//! rename_specs:
//!   - old_urn: "urn:li:dataset:(urn:li:dataPlatform:hive,db.a,PROD)"
//!     new_urn: "urn:li:dataset:(urn:li:dataPlatform:hive,db.b,PROD)"
//! ```
//!
//! Validation runs once, when the config is built. A constructed
//! [`RenameUrnConfig`] is always valid.

use crate::error::{ConfigError, ConfigResult};
use crate::urn::{entity_type_prefix, has_urn_prefix};
use serde::{Deserialize, Deserializer, Serialize};

/// Validated old → new URN rule
///
/// Both URNs carry the `urn:li:` prefix and share an entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameSpec {
    old_urn: String,
    new_urn: String,
}

impl RenameSpec {
    /// Validate and build a rule
    ///
    /// # Errors
    /// - [`ConfigError::MissingPrefix`] if either URN lacks `urn:li:`
    /// - [`ConfigError::Extraction`] if a type token cannot be extracted
    /// - [`ConfigError::EntityTypeMismatch`] if the entity types differ
    pub fn new(old_urn: impl Into<String>, new_urn: impl Into<String>) -> ConfigResult<Self> {
        let old_urn = old_urn.into();
        let new_urn = new_urn.into();

        check_prefix("old_urn", &old_urn)?;
        check_prefix("new_urn", &new_urn)?;

        let old_type = entity_type_prefix(&old_urn)?;
        let new_type = entity_type_prefix(&new_urn)?;
        if old_type != new_type {
            return Err(ConfigError::EntityTypeMismatch {
                old_type: old_type.to_string(),
                new_type: new_type.to_string(),
            });
        }

        Ok(Self { old_urn, new_urn })
    }

    /// URN this rule matches
    #[inline]
    #[must_use]
    pub fn old_urn(&self) -> &str {
        &self.old_urn
    }

    /// URN this rule substitutes
    #[inline]
    #[must_use]
    pub fn new_urn(&self) -> &str {
        &self.new_urn
    }

    /// Check if rule applies to a URN (exact string equality)
    #[inline]
    #[must_use]
    pub fn matches(&self, urn: &str) -> bool {
        self.old_urn == urn
    }
}

impl<'de> Deserialize<'de> for RenameSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawRenameSpec::deserialize(deserializer)?;
        Self::new(raw.old_urn, raw.new_urn).map_err(serde::de::Error::custom)
    }
}

/// Validated rename configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RenameUrnConfig {
    /// Every change proposal is renamed to `new_urn`
    Unconditional {
        /// Target URN
        new_urn: String,
    },
    /// Rules scanned in order; the first whose `old_urn` matches applies
    MultiRule {
        /// Rules in priority order; duplicates are kept, only the first can apply
        rename_specs: Vec<RenameSpec>,
    },
}

impl RenameUrnConfig {
    /// Build the unconditional variant
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingPrefix`] if `new_urn` lacks `urn:li:`.
    pub fn unconditional(new_urn: impl Into<String>) -> ConfigResult<Self> {
        let new_urn = new_urn.into();
        check_prefix("new_urn", &new_urn)?;
        Ok(Self::Unconditional { new_urn })
    }

    /// Build the multi-rule variant from already validated rules
    #[inline]
    #[must_use]
    pub fn multi_rule(rename_specs: Vec<RenameSpec>) -> Self {
        Self::MultiRule { rename_specs }
    }

    /// Validate and build the multi-rule variant from raw `(old, new)` pairs
    ///
    /// # Errors
    /// The first rule error, with field names qualified by rule index.
    pub fn from_pairs<I, O, N>(pairs: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (O, N)>,
        O: Into<String>,
        N: Into<String>,
    {
        let rename_specs = pairs
            .into_iter()
            .enumerate()
            .map(|(i, (old, new))| RenameSpec::new(old, new).map_err(|e| e.in_rule(i)))
            .collect::<ConfigResult<Vec<_>>>()?;
        Ok(Self::multi_rule(rename_specs))
    }

    /// Parse and validate untyped config, e.g. a recipe's `config:` block
    ///
    /// # Errors
    /// [`ConfigError::Malformed`] for shape errors, otherwise the
    /// validation error of the offending field.
    pub fn from_value(value: &serde_json::Value) -> ConfigResult<Self> {
        let raw = RawRenameUrnConfig::deserialize(value)
            .map_err(|e| ConfigError::Malformed(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Parse and validate YAML config text
    ///
    /// # Errors
    /// Same as [`RenameUrnConfig::from_value`].
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        let raw: RawRenameUrnConfig =
            serde_yaml::from_str(text).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Replacement URN for a record currently identified by `urn`
    ///
    /// `None` means the record is left untouched.
    #[must_use]
    pub fn resolve(&self, urn: &str) -> Option<&str> {
        match self {
            Self::Unconditional { new_urn } => Some(new_urn.as_str()),
            Self::MultiRule { rename_specs } => rename_specs
                .iter()
                .find(|spec| spec.matches(urn))
                .map(RenameSpec::new_urn),
        }
    }

    /// Number of rules (1 for the unconditional variant)
    #[inline]
    #[must_use]
    pub fn rule_count(&self) -> usize {
        match self {
            Self::Unconditional { .. } => 1,
            Self::MultiRule { rename_specs } => rename_specs.len(),
        }
    }

    /// Variant name for logs
    #[inline]
    #[must_use]
    pub fn variant(&self) -> &'static str {
        match self {
            Self::Unconditional { .. } => "unconditional",
            Self::MultiRule { .. } => "multi_rule",
        }
    }

    fn from_raw(raw: RawRenameUrnConfig) -> ConfigResult<Self> {
        match (raw.new_urn, raw.rename_specs) {
            (Some(new_urn), None) => Self::unconditional(new_urn),
            (None, Some(specs)) => {
                Self::from_pairs(specs.into_iter().map(|s| (s.old_urn, s.new_urn)))
            }
            (None, None) => Err(ConfigError::NoRenameTarget),
            (Some(_), Some(_)) => Err(ConfigError::ConflictingRenameTargets),
        }
    }
}

impl<'de> Deserialize<'de> for RenameUrnConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawRenameUrnConfig::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(serde::de::Error::custom)
    }
}

/// Config as written, before validation
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRenameUrnConfig {
    #[serde(default)]
    new_urn: Option<String>,
    #[serde(default)]
    rename_specs: Option<Vec<RawRenameSpec>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRenameSpec {
    old_urn: String,
    new_urn: String,
}

fn check_prefix(field: &str, value: &str) -> ConfigResult<()> {
    if has_urn_prefix(value) {
        Ok(())
    } else {
        Err(ConfigError::missing_prefix(field, value))
    }
}
