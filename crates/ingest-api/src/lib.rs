//! Ingest API
//!
//! The contract between a metadata-ingestion pipeline and the transformers
//! plugged into it.
//!
//! # Core Types
//!
//! - [`Record`]: Closed set of record kinds flowing through a pipeline
//! - [`RecordEnvelope`]: One record plus its metadata mapping
//! - [`PipelineContext`]: Run-scoped handle passed to transformer factories
//! - [`Transformer`]: Per-envelope rewrite step, object safe
//! - [`TransformStream`]: Lazy, fail-fast adapter over an envelope iterator
//! - [`TransformerRegistry`]: Name-keyed transformer factories
//!
//! # Architecture
//!
//! ```text
//! Source → RecordEnvelope* → TransformStream(Transformer) → RecordEnvelope* → Sink
//!                                    ↑
//!                 TransformerRegistry::create(name, config, ctx)
//! ```
//!
//! # Example
//!
//! ```rust
//! use ingest_api::{EndOfStream, Record, RecordEnvelope};
//!
//! let envelope = RecordEnvelope::new(Record::EndOfStream(EndOfStream));
//! assert_eq!(envelope.record.kind(), "EndOfStream");
//! assert!(envelope.workunit_id().is_none());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod context;
pub mod envelope;
pub mod error;
pub mod record;
pub mod registry;
pub mod transform;

// Re-exports for convenience
pub use context::PipelineContext;
pub use envelope::{Metadata, RecordEnvelope, WORKUNIT_ID_KEY};
pub use error::{PipelineError, PipelineResult};
pub use record::{ChangeType, ControlRecord, EndOfStream, MetadataChangeProposal, Record};
pub use registry::{TransformerFactory, TransformerRegistry};
pub use transform::{TransformStream, Transformer, TransformerExt};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for writing and driving transformers
    pub use crate::context::PipelineContext;
    pub use crate::envelope::{RecordEnvelope, WORKUNIT_ID_KEY};
    pub use crate::error::PipelineError;
    pub use crate::record::{ControlRecord, EndOfStream, MetadataChangeProposal, Record};
    pub use crate::registry::TransformerRegistry;
    pub use crate::transform::{Transformer, TransformerExt};
}
