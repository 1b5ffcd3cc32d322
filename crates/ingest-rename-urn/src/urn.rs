//! URN prefix and entity-type helpers
//!
//! Only the structural prefix is interpreted: `urn:li:` followed by an
//! entity type token. Everything after the token is opaque.

use once_cell::sync::Lazy;
use regex::Regex;

/// Required namespace prefix of every entity URN
pub const URN_PREFIX: &str = "urn:li:";

/// `urn:li:<type>` up to the first `:` or `(` after the type token
static ENTITY_TYPE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^urn:li:[^:(]+").expect("entity type pattern is a valid regex"));

/// Type-token extraction failed on a URN
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot extract entity type from {urn:?}: expected `urn:li:<type>` followed by `:` or `(`")]
pub struct ExtractionError {
    /// The URN that did not match
    pub urn: String,
}

/// Check if value carries the `urn:li:` prefix
#[inline]
#[must_use]
pub fn has_urn_prefix(value: &str) -> bool {
    value.starts_with(URN_PREFIX)
}

/// Entity type prefix of a URN, e.g. `urn:li:dataset`
///
/// Two URNs are of the same type when these prefixes are equal.
///
/// # Errors
/// Returns [`ExtractionError`] when the URN has no type token, such as
/// `urn:li:` or `urn:li:(x)`.
pub fn entity_type_prefix(urn: &str) -> Result<&str, ExtractionError> {
    ENTITY_TYPE_PREFIX
        .find(urn)
        .map(|m| m.as_str())
        .ok_or_else(|| ExtractionError {
            urn: urn.to_string(),
        })
}

/// Bare entity type token of a URN, e.g. `dataset`
///
/// # Errors
/// Same as [`entity_type_prefix`].
pub fn entity_type(urn: &str) -> Result<&str, ExtractionError> {
    entity_type_prefix(urn).map(|prefix| &prefix[URN_PREFIX.len()..])
}
