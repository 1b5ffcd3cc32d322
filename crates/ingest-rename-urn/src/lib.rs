//! URN rename transformer
//!
//! Rewrites entity URNs on metadata change proposals as they flow through
//! an ingestion pipeline.
//!
//! # Core Types
//!
//! - [`RenameUrnConfig`]: Validated config, either one target URN or an
//!   ordered list of [`RenameSpec`] rules
//! - [`RenameUrn`]: The [`Transformer`](ingest_api::Transformer) applying it
//! - [`ConfigError`]: Construction-time validation failures
//!
//! # Example
//!
//! ```rust
//! use ingest_api::{MetadataChangeProposal, PipelineContext, RecordEnvelope, TransformerExt};
//! use ingest_rename_urn::RenameUrn;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let old = "urn:li:dataset:(urn:li:dataPlatform:hive,db.old,PROD)";
//! let new = "urn:li:dataset:(urn:li:dataPlatform:hive,db.new,PROD)";
//!
//! let renamer = RenameUrn::create(
//!     &json!({ "rename_specs": [{ "old_urn": old, "new_urn": new }] }),
//!     PipelineContext::new("run-1"),
//! )?;
//!
//! let input = vec![RecordEnvelope::new(MetadataChangeProposal::new("dataset", old))];
//! let output = renamer.transform(input).try_collect()?;
//! assert_eq!(output[0].record.entity_urn(), Some(new));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod transformer;
pub mod urn;

// Re-exports
pub use config::{RenameSpec, RenameUrnConfig};
pub use error::{ConfigError, ConfigResult, URN_EXAMPLES_HINT};
pub use transformer::{register, RenameUrn, TRANSFORMER_NAME};
pub use urn::{entity_type, entity_type_prefix, has_urn_prefix, ExtractionError, URN_PREFIX};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
