//! Tests for the accumulating validator.

use anyhow::{Result, ensure};
use rstest::rstest;

use crate::error::OptionsError;
use crate::options::{NullableFieldStyle, TargetLanguage};
use crate::raw::{RawOptions, RawValue};
use crate::registry::{OptionRegistry, names};

fn kinds(violations: &[OptionsError]) -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = violations
        .iter()
        .map(|violation| match violation {
            OptionsError::UnknownOption { .. } => "unknown",
            OptionsError::InvalidValue { .. } => "invalid",
            OptionsError::ConflictingOption { .. } => "conflict",
            OptionsError::PatternCompile { .. } => "pattern",
            _ => "other",
        })
        .collect();
    labels.sort_unstable();
    labels
}

#[test]
fn an_empty_configuration_is_valid() {
    let violations = OptionRegistry::standard().validate(&RawOptions::default());
    assert!(violations.is_empty(), "unexpected: {violations:?}");
}

#[test]
fn a_fully_explicit_kotlin_configuration_is_valid() {
    let raw = RawOptions::builder()
        .set(names::TARGET_LANGUAGE, TargetLanguage::Kotlin)
        .set(names::GENERATE_DATA_BUILDERS, true)
        .set(names::GENERATE_TEST_BUILDERS, true)
        .set(names::SEALED_ENUMS_MATCHING, &[".*Kind$"][..])
        .build();
    let violations = OptionRegistry::standard().validate(&raw);
    assert!(violations.is_empty(), "unexpected: {violations:?}");
}

#[rstest]
#[case::bool_as_text(names::GENERATE_METADATA, RawValue::Text(String::from("yes")))]
#[case::text_as_list(
    names::PACKAGE_NAME_PREFIX,
    RawValue::List(vec![String::from("com"), String::from("example")])
)]
#[case::list_as_bool(names::EXCLUDED_QUERY_FILES, RawValue::Bool(true))]
#[case::paths_as_bool(names::SOURCE_FOLDERS, RawValue::Bool(true))]
fn kind_mismatches_are_invalid_values(#[case] option: &str, #[case] value: RawValue) {
    let raw = RawOptions::builder().set(option, value).build();
    let violations = OptionRegistry::standard().validate(&raw);
    assert!(
        matches!(
            violations.as_slice(),
            [OptionsError::InvalidValue { option: name, .. }] if name == option
        ),
        "unexpected: {violations:?}"
    );
}

#[test]
fn unrecognised_enum_tokens_name_the_expected_space() {
    let raw = RawOptions::builder()
        .set(names::TARGET_LANGUAGE, "scala")
        .build();
    let violations = OptionRegistry::standard().validate(&raw);
    match violations.as_slice() {
        [OptionsError::InvalidValue { option, message }] => {
            assert_eq!(option, names::TARGET_LANGUAGE);
            assert!(message.contains("scala"), "{message}");
            assert!(message.contains("java, kotlin"), "{message}");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn wrapper_style_conflicts_under_the_native_flavour() {
    let raw = RawOptions::builder()
        .set(names::TARGET_LANGUAGE, TargetLanguage::Kotlin)
        .set(names::NULLABLE_FIELD_STYLE, NullableFieldStyle::Annotated)
        .build();
    let violations = OptionRegistry::standard().validate(&raw);
    match violations.as_slice() {
        [OptionsError::ConflictingOption { option, requirement }] => {
            assert_eq!(option, names::NULLABLE_FIELD_STYLE);
            assert!(requirement.contains("java"), "{requirement}");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn builder_toggles_conflict_when_the_flavour_is_only_defaulted() {
    // No explicit targetLanguage: the defaulted java flavour still gates
    // the kotlin-only toggles.
    let raw = RawOptions::builder()
        .set(names::GENERATE_DATA_BUILDERS, true)
        .build();
    let violations = OptionRegistry::standard().validate(&raw);
    assert!(
        matches!(
            violations.as_slice(),
            [OptionsError::ConflictingOption { option, .. }]
                if option == names::GENERATE_DATA_BUILDERS
        ),
        "unexpected: {violations:?}"
    );
}

#[test]
fn re_supplying_the_derived_value_of_a_gated_option_is_accepted() {
    let raw = RawOptions::builder()
        .set(names::TARGET_LANGUAGE, TargetLanguage::Kotlin)
        .set(names::NULLABLE_FIELD_STYLE, NullableFieldStyle::None)
        .set(names::GENERATE_MODEL_BUILDERS, false)
        .build();
    let violations = OptionRegistry::standard().validate(&raw);
    assert!(violations.is_empty(), "unexpected: {violations:?}");
}

#[test]
fn sealed_enum_patterns_conflict_under_the_wrapper_flavour() {
    let raw = RawOptions::builder()
        .set(names::TARGET_LANGUAGE, TargetLanguage::Java)
        .set(names::SEALED_ENUMS_MATCHING, &["Episode"][..])
        .build();
    let violations = OptionRegistry::standard().validate(&raw);
    assert_eq!(kinds(&violations), ["conflict"]);
}

#[test]
fn each_malformed_pattern_is_reported_individually() {
    let raw = RawOptions::builder()
        .set(names::TARGET_LANGUAGE, TargetLanguage::Kotlin)
        .set(names::SEALED_ENUMS_MATCHING, &["[invalid(", "valid.*", "(unclosed"][..])
        .build();
    let violations = OptionRegistry::standard().validate(&raw);
    assert_eq!(violations.len(), 2, "unexpected: {violations:?}");
    for violation in &violations {
        assert!(
            matches!(
                violation,
                OptionsError::PatternCompile { option, .. }
                    if option == names::SEALED_ENUMS_MATCHING
            ),
            "unexpected: {violation:?}"
        );
    }
}

#[test]
fn malformed_scalar_mappings_are_invalid_values() {
    let raw = RawOptions::builder()
        .set(
            names::CUSTOM_SCALAR_MAPPINGS,
            &["DateTime=java.time.Instant", "Upload"][..],
        )
        .build();
    let violations = OptionRegistry::standard().validate(&raw);
    match violations.as_slice() {
        [OptionsError::InvalidValue { option, message }] => {
            assert_eq!(option, names::CUSTOM_SCALAR_MAPPINGS);
            assert!(message.contains("Upload"), "{message}");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn unknown_options_are_reported_alongside_other_violations() {
    let raw = RawOptions::builder()
        .set("generateKoans", true)
        .set(names::GENERATE_METADATA, "yes")
        .build();
    let violations = OptionRegistry::standard().validate(&raw);
    assert_eq!(kinds(&violations), ["invalid", "unknown"]);
}

#[test]
fn unrelated_violations_accumulate_in_one_pass() -> Result<()> {
    // A malformed pattern, a bad scalar mapping, and a conflicting builder
    // toggle: all three surface together.
    let raw = RawOptions::builder()
        .set(names::ALWAYS_GENERATE_TYPES_MATCHING, &["[invalid("][..])
        .set(names::CUSTOM_SCALAR_MAPPINGS, &["DateTime"][..])
        .set(names::GENERATE_TEST_BUILDERS, true)
        .build();
    let violations = OptionRegistry::standard().validate(&raw);
    ensure!(
        kinds(&violations) == ["conflict", "invalid", "pattern"],
        "unexpected: {violations:?}"
    );
    Ok(())
}
