//! Tests for the domain value types.

use anyhow::{Result, ensure};
use rstest::rstest;
use serde_json::json;

use super::{
    CodegenModels, NullableFieldStyle, OperationIdStrategy, PatternSet, ScalarMapping,
    TargetLanguage,
};

#[rstest]
#[case::java(TargetLanguage::Java, "java")]
#[case::kotlin(TargetLanguage::Kotlin, "kotlin")]
fn target_language_tokens_round_trip(
    #[case] language: TargetLanguage,
    #[case] token: &str,
) -> Result<()> {
    ensure!(language.as_token() == token, "token mismatch for {language}");
    let serialised = serde_json::to_value(language)?;
    ensure!(serialised == json!(token), "unexpected serialisation");
    let parsed: TargetLanguage = serde_json::from_value(json!(token))?;
    ensure!(parsed == language, "round trip changed the variant");
    Ok(())
}

#[test]
fn enum_token_tables_match_serde_names() -> Result<()> {
    for token in CodegenModels::TOKENS {
        let parsed: CodegenModels = serde_json::from_value(json!(token))?;
        ensure!(
            parsed.as_token() == *token,
            "token table out of step for {token}"
        );
    }
    for token in OperationIdStrategy::TOKENS {
        let parsed: OperationIdStrategy = serde_json::from_value(json!(token))?;
        ensure!(
            parsed.as_token() == *token,
            "token table out of step for {token}"
        );
    }
    for token in NullableFieldStyle::TOKENS {
        let parsed: NullableFieldStyle = serde_json::from_value(json!(token))?;
        ensure!(
            parsed.as_token() == *token,
            "token table out of step for {token}"
        );
    }
    Ok(())
}

#[test]
fn unrecognised_enum_token_is_rejected() {
    let parsed: Result<TargetLanguage, _> = serde_json::from_value(json!("scala"));
    assert!(parsed.is_err());
}

#[rstest]
#[case::plain("DateTime=java.time.Instant", "DateTime", "java.time.Instant", None)]
#[case::with_adapter(
    "DateTime=java.time.Instant:com.example.InstantAdapter",
    "DateTime",
    "java.time.Instant",
    Some("com.example.InstantAdapter")
)]
#[case::padded(" Upload = okio.ByteString ", "Upload", "okio.ByteString", None)]
fn scalar_mapping_parses(
    #[case] entry: &str,
    #[case] scalar: &str,
    #[case] target: &str,
    #[case] adapter: Option<&str>,
) -> Result<()> {
    let mapping: ScalarMapping = entry.parse()?;
    ensure!(mapping.scalar() == scalar, "scalar mismatch");
    ensure!(mapping.target() == target, "target mismatch");
    ensure!(mapping.adapter() == adapter, "adapter mismatch");
    Ok(())
}

#[rstest]
#[case::no_separator("DateTime")]
#[case::empty_scalar("=java.time.Instant")]
#[case::empty_target("DateTime=")]
#[case::empty_adapter("DateTime=java.time.Instant:")]
fn malformed_scalar_mapping_is_rejected(#[case] entry: &str) {
    let parsed: Result<ScalarMapping, _> = entry.parse();
    assert!(parsed.is_err(), "'{entry}' should not parse");
}

#[test]
fn scalar_mapping_display_round_trips() -> Result<()> {
    let mapping = ScalarMapping::new("DateTime", "java.time.Instant")
        .with_adapter("com.example.InstantAdapter");
    let reparsed: ScalarMapping = mapping.to_string().parse()?;
    ensure!(reparsed == mapping, "display text did not round trip");
    Ok(())
}

#[test]
fn match_all_pattern_set_matches_everything() -> Result<()> {
    let set = PatternSet::match_all().to_regex_set()?;
    ensure!(set.is_match("Droid"), "'.*' should match any name");
    ensure!(set.is_match(""), "'.*' should match the empty name");
    Ok(())
}

#[test]
fn empty_pattern_set_matches_nothing() -> Result<()> {
    let set = PatternSet::empty();
    ensure!(set.is_empty(), "empty set should report empty");
    ensure!(
        !set.to_regex_set()?.is_match("Droid"),
        "empty set should match nothing"
    );
    Ok(())
}

#[test]
fn unvalidated_pattern_sources_surface_compile_errors() {
    let set = PatternSet::new(vec![String::from("[invalid(")]);
    assert!(set.to_regex_set().is_err());
}

#[test]
fn pattern_set_serialises_as_its_sources() -> Result<()> {
    let set: PatternSet = vec![String::from("^Query$"), String::from("Hero.*")]
        .into_iter()
        .collect();
    ensure!(
        serde_json::to_value(&set)? == json!(["^Query$", "Hero.*"]),
        "sources should serialise transparently"
    );
    Ok(())
}
