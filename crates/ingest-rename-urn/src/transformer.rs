//! The `rename_urn` transformer
//!
//! Rewrites `entity_urn` on change proposals according to a
//! [`RenameUrnConfig`]. Control and end-of-stream records pass through;
//! any other record kind aborts the stream.

use crate::config::RenameUrnConfig;
use crate::error::ConfigResult;
use ingest_api::{
    PipelineContext, PipelineError, PipelineResult, Record, RecordEnvelope, Transformer,
    TransformerRegistry,
};

/// Registry name of this transformer
pub const TRANSFORMER_NAME: &str = "rename_urn";

/// URN rename transformer
#[derive(Debug, Clone)]
pub struct RenameUrn {
    config: RenameUrnConfig,
    ctx: PipelineContext,
}

impl RenameUrn {
    /// Create transformer from validated config
    #[must_use]
    pub fn new(config: RenameUrnConfig, ctx: PipelineContext) -> Self {
        tracing::info!(
            run_id = %ctx.run_id,
            variant = config.variant(),
            rules = config.rule_count(),
            "Created URN rename transformer"
        );
        Self { config, ctx }
    }

    /// Validate raw config and create transformer
    ///
    /// # Errors
    /// Returns the [`ConfigError`](crate::ConfigError) of the first invalid
    /// field; the pipeline must not start with it.
    pub fn create(config: &serde_json::Value, ctx: PipelineContext) -> ConfigResult<Self> {
        let config = RenameUrnConfig::from_value(config)?;
        Ok(Self::new(config, ctx))
    }

    /// Validated config
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RenameUrnConfig {
        &self.config
    }

    /// Pipeline context given at construction
    #[inline]
    #[must_use]
    pub fn ctx(&self) -> &PipelineContext {
        &self.ctx
    }

    fn rename(&self, envelope: &mut RecordEnvelope, new_urn: &str) {
        let Record::ChangeProposal(mcp) = &mut envelope.record else {
            return;
        };
        let old_urn = std::mem::replace(&mut mcp.entity_urn, new_urn.to_owned());

        if let Some(label) = envelope.workunit_id_mut() {
            rewrite_workunit_label(label, &old_urn, new_urn);
        }

        tracing::debug!(
            run_id = %self.ctx.run_id,
            %old_urn,
            new_urn,
            "Renamed entity URN"
        );
    }
}

impl Transformer for RenameUrn {
    fn name(&self) -> &str {
        TRANSFORMER_NAME
    }

    fn transform_envelope(&self, mut envelope: RecordEnvelope) -> PipelineResult<RecordEnvelope> {
        let new_urn = match &envelope.record {
            Record::ChangeProposal(mcp) => self.config.resolve(&mcp.entity_urn),
            Record::Control(_) | Record::EndOfStream(_) => {
                tracing::trace!(kind = envelope.record.kind(), "Passing through signal record");
                None
            }
            Record::Unsupported { kind } => {
                return Err(PipelineError::unsupported_kind(kind.as_str()));
            }
        };

        if let Some(new_urn) = new_urn {
            self.rename(&mut envelope, new_urn);
        }
        Ok(envelope)
    }
}

/// Replace the first occurrence of `old_urn` in a workunit label
fn rewrite_workunit_label(label: &mut String, old_urn: &str, new_urn: &str) {
    if label.contains(old_urn) {
        *label = label.replacen(old_urn, new_urn, 1);
    } else {
        tracing::debug!(workunit_id = %label, old_urn, "Workunit label does not contain the renamed URN");
    }
}

fn factory(
    config: &serde_json::Value,
    ctx: PipelineContext,
) -> PipelineResult<Box<dyn Transformer>> {
    RenameUrn::create(config, ctx)
        .map(|transformer| Box::new(transformer) as Box<dyn Transformer>)
        .map_err(|e| PipelineError::configuration(TRANSFORMER_NAME, e))
}

/// Install the `rename_urn` factory into a host registry
pub fn register(registry: &mut TransformerRegistry) {
    registry.register(TRANSFORMER_NAME, factory);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ingest_api::{ControlRecord, EndOfStream, MetadataChangeProposal, WORKUNIT_ID_KEY};
    use serde_json::json;

    const OLD: &str = "urn:li:dataset:(urn:li:dataPlatform:hive,db.old,PROD)";
    const NEW: &str = "urn:li:dataset:(urn:li:dataPlatform:hive,db.new,PROD)";

    fn mcp(urn: &str) -> RecordEnvelope {
        RecordEnvelope::new(MetadataChangeProposal::new("dataset", urn))
    }

    fn renamer(config: serde_json::Value) -> RenameUrn {
        RenameUrn::create(&config, PipelineContext::new("test-run")).unwrap()
    }

    #[test]
    fn unconditional_overwrites_urn() {
        let out = renamer(json!({ "new_urn": NEW }))
            .transform_envelope(mcp(OLD))
            .unwrap();
        assert_eq!(out.record.entity_urn(), Some(NEW));
    }

    #[test]
    fn multi_rule_leaves_unmatched_untouched() {
        let transformer = renamer(json!({ "rename_specs": [{ "old_urn": OLD, "new_urn": NEW }] }));
        let input = mcp("urn:li:dataset:(urn:li:dataPlatform:hive,db.other,PROD)").with_workunit_id("wu");
        let out = transformer.transform_envelope(input.clone()).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn rewrites_first_label_occurrence_only() {
        let label = format!("run-1-{OLD}-{OLD}");
        let out = renamer(json!({ "new_urn": NEW }))
            .transform_envelope(mcp(OLD).with_workunit_id(label))
            .unwrap();
        assert_eq!(out.workunit_id(), Some(format!("run-1-{NEW}-{OLD}").as_str()));
    }

    #[test]
    fn label_without_old_urn_is_kept() {
        let out = renamer(json!({ "new_urn": NEW }))
            .transform_envelope(mcp(OLD).with_workunit_id("unrelated-label"))
            .unwrap();
        assert_eq!(out.workunit_id(), Some("unrelated-label"));
        assert_eq!(out.record.entity_urn(), Some(NEW));
    }

    #[test]
    fn rename_to_same_urn_keeps_label() {
        let transformer = renamer(json!({ "rename_specs": [{ "old_urn": OLD, "new_urn": OLD }] }));
        let input = mcp(OLD).with_workunit_id(format!("run-1-{OLD}"));
        let out = transformer.transform_envelope(input.clone()).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn multi_rule_rewrites_label_of_matched_record() {
        let transformer = renamer(json!({ "rename_specs": [{ "old_urn": OLD, "new_urn": NEW }] }));
        let out = transformer
            .transform_envelope(mcp(OLD).with_workunit_id(format!("{OLD}-aspect")))
            .unwrap();
        assert_eq!(out.record.entity_urn(), Some(NEW));
        assert_eq!(out.workunit_id(), Some(format!("{NEW}-aspect").as_str()));
    }

    #[test]
    fn non_string_label_is_kept() {
        let out = renamer(json!({ "new_urn": NEW }))
            .transform_envelope(mcp(OLD).with_metadata(WORKUNIT_ID_KEY, 7))
            .unwrap();
        assert_eq!(out.metadata[WORKUNIT_ID_KEY], 7);
    }

    #[test]
    fn signals_pass_through() {
        let transformer = renamer(json!({ "new_urn": NEW }));
        for envelope in [
            RecordEnvelope::new(ControlRecord::new("commit")).with_workunit_id(OLD),
            RecordEnvelope::new(EndOfStream),
        ] {
            assert_eq!(transformer.transform_envelope(envelope.clone()).unwrap(), envelope);
        }
    }

    #[test]
    fn unsupported_kind_fails() {
        let err = renamer(json!({ "new_urn": NEW }))
            .transform_envelope(RecordEnvelope::new(Record::unsupported("MetadataChangeEvent")))
            .unwrap_err();
        assert!(matches!(err, PipelineError::UnsupportedRecordKind { ref kind } if kind == "MetadataChangeEvent"));
    }

    #[test]
    fn registry_factory_wraps_config_errors() {
        let mut registry = TransformerRegistry::new();
        register(&mut registry);
        assert!(registry.contains(TRANSFORMER_NAME));

        let err = registry
            .create(TRANSFORMER_NAME, &json!({ "new_urn": "bad" }), PipelineContext::default())
            .unwrap_err();
        assert!(matches!(err, PipelineError::Configuration { ref transformer, .. } if transformer == TRANSFORMER_NAME));
    }

    #[test]
    fn accessors_expose_construction_inputs() {
        let transformer = renamer(json!({ "new_urn": NEW }));
        assert_eq!(transformer.ctx().run_id, "test-run");
        assert_eq!(transformer.config().resolve(OLD), Some(NEW));
        assert_eq!(transformer.name(), "rename_urn");
    }
}
