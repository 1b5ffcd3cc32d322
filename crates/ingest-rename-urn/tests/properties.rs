//! Property tests for config validation and stream shape

use ingest_api::{RecordEnvelope, TransformerExt};
use ingest_rename_urn::{ConfigError, RenameSpec, RenameUrn, RenameUrnConfig};
use ingest_test_utils::*;
use proptest::prelude::*;

fn entity_type_token() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,15}"
}

fn urn_of_type(token: String) -> impl Strategy<Value = String> {
    "[a-z0-9_.,/]{1,20}".prop_map(move |body| format!("urn:li:{token}:({body})"))
}

fn any_urn() -> impl Strategy<Value = String> {
    entity_type_token().prop_flat_map(urn_of_type)
}

/// Strings without the `urn:li:` prefix, biased towards near misses
fn unprefixed_urn() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("urn:li".to_string()),
        Just("urn:lix".to_string()),
        Just("URN:LI:dataset:x".to_string()),
        Just(" urn:li:dataset:x".to_string()),
        "(urn|URN|Urn)[:;]?(li|LI)?[:_]?[a-z:()]{0,12}",
        "[^u].*",
        ".*",
    ]
    .prop_filter("must not carry the URN prefix", |s| !s.starts_with("urn:li:"))
}

fn any_envelope() -> impl Strategy<Value = RecordEnvelope> {
    prop_oneof![
        any_urn().prop_map(|urn| mcp_envelope(&urn)),
        Just(control_envelope()),
        Just(end_of_stream_envelope()),
    ]
}

proptest! {
    #[test]
    fn prop_unprefixed_new_urn_rejected(value in unprefixed_urn()) {
        let err = RenameUrnConfig::unconditional(value).unwrap_err();
        prop_assert!(matches!(err, ConfigError::MissingPrefix { .. }), "{err}");
    }

    #[test]
    fn prop_unprefixed_rule_fields_rejected(bad in unprefixed_urn(), good in any_urn()) {
        let err = RenameSpec::new(bad.clone(), good.clone()).unwrap_err();
        prop_assert!(
            matches!(err, ConfigError::MissingPrefix { ref field, .. } if field == "old_urn"),
            "{err}"
        );

        let err = RenameSpec::new(good, bad).unwrap_err();
        prop_assert!(
            matches!(err, ConfigError::MissingPrefix { ref field, .. } if field == "new_urn"),
            "{err}"
        );
    }

    #[test]
    fn prop_same_type_rules_accepted(
        (old, new) in entity_type_token().prop_flat_map(|t| (urn_of_type(t.clone()), urn_of_type(t)))
    ) {
        prop_assert!(RenameSpec::new(old, new).is_ok());
    }

    #[test]
    fn prop_different_type_rules_rejected(
        old_type in entity_type_token(),
        new_type in entity_type_token(),
        old_body in "[a-z]{1,8}",
        new_body in "[a-z]{1,8}",
    ) {
        prop_assume!(old_type != new_type);
        let err = RenameSpec::new(
            format!("urn:li:{old_type}:{old_body}"),
            format!("urn:li:{new_type}:{new_body}"),
        )
        .unwrap_err();
        prop_assert!(matches!(err, ConfigError::EntityTypeMismatch { .. }), "{err}");
    }

    #[test]
    fn prop_stream_preserves_length_and_order(envelopes in prop::collection::vec(any_envelope(), 0..32)) {
        let renamer = RenameUrn::new(
            RenameUrnConfig::unconditional(S3_DATASET_URN).unwrap(),
            test_context(),
        );
        let input = sequenced(envelopes);
        let expected: Vec<u64> = (0..input.len() as u64).collect();

        let output = renamer.transform(input).try_collect().unwrap();

        prop_assert_eq!(sequence_of(&output), expected);
    }

    #[test]
    fn prop_no_match_is_identity(envelopes in prop::collection::vec(any_envelope(), 0..32)) {
        // generated URN bodies never contain `:`, so this rule cannot match
        let renamer = RenameUrn::new(
            RenameUrnConfig::from_pairs([(HIVE_DATASET_URN, S3_DATASET_URN)]).unwrap(),
            test_context(),
        );
        let input = sequenced(envelopes);

        let output = renamer.transform(input.clone()).try_collect().unwrap();

        prop_assert_eq!(output, input);
    }
}
