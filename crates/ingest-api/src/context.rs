//! Pipeline context handed to transformer factories

use serde::{Deserialize, Serialize};

/// Run-scoped pipeline handle
///
/// Transformers store it and may read it for log fields; it carries no
/// behavior of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineContext {
    /// Ingestion run identifier
    pub run_id: String,
    /// Pipeline name, when the recipe sets one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_name: Option<String>,
    /// Whether sinks should skip writes
    #[serde(default)]
    pub dry_run: bool,
}

impl PipelineContext {
    /// Create context for a run
    #[inline]
    #[must_use]
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            pipeline_name: None,
            dry_run: false,
        }
    }

    /// With pipeline name
    #[inline]
    #[must_use]
    pub fn with_pipeline_name(mut self, name: impl Into<String>) -> Self {
        self.pipeline_name = Some(name.into());
        self
    }

    /// With dry-run flag
    #[inline]
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Default for PipelineContext {
    fn default() -> Self {
        Self::new("__DEFAULT_RUN_ID")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let ctx = PipelineContext::new("run-7")
            .with_pipeline_name("warehouse")
            .with_dry_run(true);
        assert_eq!(ctx.run_id, "run-7");
        assert_eq!(ctx.pipeline_name.as_deref(), Some("warehouse"));
        assert!(ctx.dry_run);
    }

    #[test]
    fn default_has_placeholder_run_id() {
        let ctx = PipelineContext::default();
        assert_eq!(ctx.run_id, "__DEFAULT_RUN_ID");
        assert!(!ctx.dry_run);
    }
}
