//! Property-style checks: totality, determinism, and idempotence.

use anyhow::{Result, ensure};
use querygen_config::{OptionRegistry, RawOptions, TargetLanguage, names};
use rstest::rstest;

fn representative_configurations() -> Vec<RawOptions> {
    vec![
        RawOptions::default(),
        RawOptions::builder()
            .set(names::GENERATE_METADATA, true)
            .build(),
        RawOptions::builder()
            .set(names::TARGET_LANGUAGE, TargetLanguage::Kotlin)
            .set(names::CODEGEN_MODELS, "responseBased")
            .set(names::GENERATE_TEST_BUILDERS, true)
            .build(),
        RawOptions::builder()
            .set(names::TARGET_LANGUAGE, TargetLanguage::Java)
            .set(names::NULLABLE_FIELD_STYLE, "javaOptional")
            .set(names::GENERATE_MODEL_BUILDERS, true)
            .set(names::PACKAGE_NAME_PREFIX, "com.example")
            .set(
                names::CUSTOM_SCALAR_MAPPINGS,
                &["DateTime=java.time.Instant"][..],
            )
            .build(),
    ]
}

#[rstest]
fn every_registered_option_has_a_value_in_the_snapshot() -> Result<()> {
    let registry = OptionRegistry::standard();
    for raw in representative_configurations() {
        let snapshot = registry.resolve(&raw)?;
        let object = serde_json::to_value(&snapshot)?;
        let keys = object
            .as_object()
            .ok_or_else(|| anyhow::anyhow!("snapshot must serialise as an object"))?;
        for descriptor in registry.iter() {
            ensure!(
                keys.contains_key(descriptor.name()),
                "option '{}' missing from the snapshot",
                descriptor.name()
            );
        }
        ensure!(
            keys.len() == registry.len(),
            "snapshot carries values beyond the registry"
        );
    }
    Ok(())
}

#[rstest]
fn resolution_is_deterministic_across_repeated_runs() -> Result<()> {
    let registry = OptionRegistry::standard();
    for raw in representative_configurations() {
        let first = registry.resolve(&raw)?;
        let second = registry.resolve(&raw)?;
        ensure!(first == second, "re-resolving {raw:?} changed the snapshot");
    }
    Ok(())
}

#[rstest]
fn snapshots_are_fixed_points_of_resolution() -> Result<()> {
    let registry = OptionRegistry::standard();
    for raw in representative_configurations() {
        let snapshot = registry.resolve(&raw)?;
        let replayed = registry.resolve(&snapshot.to_raw())?;
        ensure!(
            replayed == snapshot,
            "snapshot for {raw:?} is not a fixed point"
        );
    }
    Ok(())
}

#[rstest]
fn snapshots_survive_the_json_transport_round_trip() -> Result<()> {
    let registry = OptionRegistry::standard();
    for raw in representative_configurations() {
        let snapshot = registry.resolve(&raw)?;
        let transported = RawOptions::from_json(serde_json::to_value(&snapshot)?)?;
        let replayed = registry.resolve(&transported)?;
        ensure!(
            replayed == snapshot,
            "snapshot for {raw:?} changed across the JSON transport"
        );
    }
    Ok(())
}
