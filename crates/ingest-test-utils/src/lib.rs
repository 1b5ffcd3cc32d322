//! Testing utilities for the ingest workspace
//!
//! Shared URN fixtures and envelope builders.

#![allow(missing_docs)]

use ingest_api::{
    ControlRecord, EndOfStream, MetadataChangeProposal, PipelineContext, Record, RecordEnvelope,
};

pub const HIVE_DATASET_URN: &str = "urn:li:dataset:(urn:li:dataPlatform:hive,x,PROD)";
pub const S3_DATASET_URN: &str = "urn:li:dataset:(urn:li:dataPlatform:s3,b/t,PROD)";
pub const SNOWFLAKE_DATASET_URN: &str =
    "urn:li:dataset:(urn:li:dataPlatform:snowflake,analytics.public.order_details,PROD)";
pub const CHART_URN: &str = "urn:li:chart:(looker,dashboard_elements.1)";
pub const CORPUSER_URN: &str = "urn:li:corpuser:jdoe";

/// Metadata key used to tag envelopes with their input position
pub const SEQ_KEY: &str = "seq";

pub fn test_context() -> PipelineContext {
    PipelineContext::new("test-run").with_pipeline_name("test-pipeline")
}

pub fn mcp_envelope(urn: &str) -> RecordEnvelope {
    RecordEnvelope::new(MetadataChangeProposal::new("dataset", urn))
}

pub fn mcp_envelope_with_workunit(urn: &str, workunit_id: &str) -> RecordEnvelope {
    mcp_envelope(urn).with_workunit_id(workunit_id)
}

pub fn control_envelope() -> RecordEnvelope {
    RecordEnvelope::new(ControlRecord::new("commit"))
}

pub fn end_of_stream_envelope() -> RecordEnvelope {
    RecordEnvelope::new(EndOfStream)
}

pub fn unsupported_envelope(kind: &str) -> RecordEnvelope {
    RecordEnvelope::new(Record::unsupported(kind))
}

/// Tag each envelope with its position under [`SEQ_KEY`]
pub fn sequenced(envelopes: impl IntoIterator<Item = RecordEnvelope>) -> Vec<RecordEnvelope> {
    envelopes
        .into_iter()
        .enumerate()
        .map(|(i, envelope)| envelope.with_metadata(SEQ_KEY, i))
        .collect()
}

/// Positions recorded by [`sequenced`], in output order
pub fn sequence_of(envelopes: &[RecordEnvelope]) -> Vec<u64> {
    envelopes
        .iter()
        .filter_map(|envelope| envelope.metadata.get(SEQ_KEY).and_then(serde_json::Value::as_u64))
        .collect()
}

pub fn entity_urns(envelopes: &[RecordEnvelope]) -> Vec<Option<&str>> {
    envelopes.iter().map(|envelope| envelope.record.entity_urn()).collect()
}
