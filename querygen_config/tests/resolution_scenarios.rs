//! End-to-end resolution scenarios for representative configurations.

use anyhow::{Result, ensure};
use querygen_config::{
    CodegenModels, NullableFieldStyle, OptionRegistry, OptionsError, RawOptions, ScalarMapping,
    TargetLanguage, names,
};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn a_bare_configuration_resolves_to_the_wrapper_flavour_defaults() -> Result<()> {
    let snapshot = OptionRegistry::standard().resolve(&RawOptions::default())?;
    ensure!(snapshot.target_language() == TargetLanguage::Java, "flavour");
    ensure!(
        snapshot.codegen_models() == CodegenModels::OperationBased,
        "model shape"
    );
    ensure!(
        snapshot.nullable_field_style() == NullableFieldStyle::Annotated,
        "wrapper flavour defaults to annotations"
    );
    ensure!(snapshot.flatten_models(), "operation-based models flatten");
    ensure!(!snapshot.generate_metadata(), "metadata is opt-in");
    Ok(())
}

#[rstest]
fn a_metadata_module_forces_full_type_generation() -> Result<()> {
    let raw = RawOptions::builder()
        .set(names::GENERATE_METADATA, true)
        .build();
    let snapshot = OptionRegistry::standard().resolve(&raw)?;
    let matcher = snapshot.always_generate_types_matching().to_regex_set()?;
    ensure!(matcher.is_match("Droid"), "every type is generated");
    ensure!(
        !snapshot.metadata_output_file().as_str().is_empty(),
        "metadata artefact path is derived"
    );
    Ok(())
}

#[rstest]
fn a_kotlin_multi_module_configuration_resolves() -> Result<()> {
    let raw = RawOptions::from_json(json!({
        "targetLanguage": "kotlin",
        "codegenModels": "responseBased",
        "packageNamePrefix": "com.example.starwars",
        "sealedEnumsMatching": ["^Episode$"],
        "generateDataBuilders": true,
        "customScalarMappings": [
            "DateTime=kotlinx.datetime.Instant:com.example.InstantAdapter"
        ],
        "sourceFolders": ["src/main/graphql", "src/commonMain/graphql"],
    }))?;
    let snapshot = OptionRegistry::standard().resolve(&raw)?;
    ensure!(snapshot.target_language() == TargetLanguage::Kotlin, "flavour");
    ensure!(
        !snapshot.flatten_models(),
        "response-based models keep their paths"
    );
    ensure!(
        snapshot.nullable_field_style() == NullableFieldStyle::None,
        "native flavour needs no wrapper style"
    );
    ensure!(snapshot.generate_data_builders(), "data builders");
    let expected = ScalarMapping::new("DateTime", "kotlinx.datetime.Instant")
        .with_adapter("com.example.InstantAdapter");
    ensure!(
        snapshot.custom_scalar_mappings() == [expected],
        "scalar mapping survived resolution"
    );
    ensure!(snapshot.source_folders().len() == 2, "both source folders");
    Ok(())
}

#[rstest]
fn wrapper_only_styles_are_refused_under_the_native_flavour() {
    let raw = RawOptions::builder()
        .set(names::TARGET_LANGUAGE, TargetLanguage::Kotlin)
        .set(names::NULLABLE_FIELD_STYLE, NullableFieldStyle::GuavaOptional)
        .build();
    let err = OptionRegistry::standard()
        .resolve(&raw)
        .expect_err("wrapper styles need the wrapper flavour");
    assert!(
        matches!(
            &*err,
            OptionsError::ConflictingOption { option, .. }
                if option == names::NULLABLE_FIELD_STYLE
        ),
        "unexpected: {err:?}"
    );
}

#[rstest]
#[case::sha256("sha256")]
#[case::md5("md5")]
#[case::relative_path("relativePath")]
fn every_operation_id_strategy_is_accepted(#[case] token: &str) -> Result<()> {
    let raw = RawOptions::builder()
        .set(names::OPERATION_ID_STRATEGY, token)
        .build();
    let snapshot = OptionRegistry::standard().resolve(&raw)?;
    ensure!(
        snapshot.operation_id_strategy().as_token() == token,
        "strategy token changed in flight"
    );
    Ok(())
}
