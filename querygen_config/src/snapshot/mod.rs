//! The immutable, fully-resolved configuration snapshot.

use std::collections::BTreeMap;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, OptionsResult};
use crate::options::{
    CodegenModels, NullableFieldStyle, OperationIdStrategy, PatternSet, ScalarMapping,
    TargetLanguage,
};
use crate::raw::RawOptions;
use crate::registry::OptionValue;

/// Fully-resolved configuration consumed by the generator backend.
///
/// Total and immutable: every registered option has exactly one value,
/// there are no setters, and the snapshot can be shared across concurrent
/// readers. Serialises to a JSON object keyed by option name, the same
/// shape [`RawOptions::from_json`] accepts, so a snapshot can be fed back
/// through resolution unchanged.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResolvedOptions {
    target_language: TargetLanguage,
    codegen_models: CodegenModels,
    use_semantic_naming: bool,
    package_name_prefix: String,
    operation_id_strategy: OperationIdStrategy,
    custom_scalar_mappings: Vec<ScalarMapping>,
    excluded_query_files: Vec<String>,
    sealed_enums_matching: PatternSet,
    generate_metadata: bool,
    always_generate_types_matching: PatternSet,
    metadata_output_file: Utf8PathBuf,
    flatten_models: bool,
    generate_fragment_implementations: bool,
    nullable_field_style: NullableFieldStyle,
    generate_model_builders: bool,
    generate_data_builders: bool,
    generate_test_builders: bool,
    source_folders: Vec<Utf8PathBuf>,
}

impl ResolvedOptions {
    /// Materialise a snapshot from the resolver's typed values.
    ///
    /// The value map serialises to the snapshot's own JSON shape, so this
    /// round-trips through serde; a mismatch means the catalogue and the
    /// snapshot have drifted apart and is reported as
    /// [`OptionsError::Snapshot`].
    pub(crate) fn from_values(
        values: &BTreeMap<&'static str, OptionValue>,
    ) -> OptionsResult<Self> {
        let object = serde_json::to_value(values)
            .map_err(|source| Arc::new(OptionsError::Snapshot { source: Box::new(source) }))?;
        serde_json::from_value(object)
            .map_err(|source| Arc::new(OptionsError::Snapshot { source: Box::new(source) }))
    }

    /// Output-language flavour targeted by the generator.
    #[must_use]
    pub const fn target_language(&self) -> TargetLanguage {
        self.target_language
    }

    /// Shape of the generated operation models.
    #[must_use]
    pub const fn codegen_models(&self) -> CodegenModels {
        self.codegen_models
    }

    /// Whether generated names follow schema semantics.
    #[must_use]
    pub const fn use_semantic_naming(&self) -> bool {
        self.use_semantic_naming
    }

    /// Prefix prepended to every generated package name; empty for none.
    #[must_use]
    pub fn package_name_prefix(&self) -> &str {
        &self.package_name_prefix
    }

    /// Strategy for persisted operation identifiers.
    #[must_use]
    pub const fn operation_id_strategy(&self) -> OperationIdStrategy {
        self.operation_id_strategy
    }

    /// Custom scalar mappings, in supplied order.
    #[must_use]
    pub fn custom_scalar_mappings(&self) -> &[ScalarMapping] {
        &self.custom_scalar_mappings
    }

    /// Query documents excluded from generation, as opaque glob strings.
    #[must_use]
    pub fn excluded_query_files(&self) -> &[String] {
        &self.excluded_query_files
    }

    /// Schema enums generated as sealed classes when their name matches.
    #[must_use]
    pub const fn sealed_enums_matching(&self) -> &PatternSet {
        &self.sealed_enums_matching
    }

    /// Whether a metadata artefact is emitted for downstream modules.
    #[must_use]
    pub const fn generate_metadata(&self) -> bool {
        self.generate_metadata
    }

    /// Schema types generated even when unused by any operation.
    #[must_use]
    pub const fn always_generate_types_matching(&self) -> &PatternSet {
        &self.always_generate_types_matching
    }

    /// Where the metadata artefact is written; empty when none is.
    #[must_use]
    pub fn metadata_output_file(&self) -> &Utf8Path {
        &self.metadata_output_file
    }

    /// Whether nested model types are hoisted to shorter paths.
    #[must_use]
    pub const fn flatten_models(&self) -> bool {
        self.flatten_models
    }

    /// Whether fragments get concrete implementation classes.
    #[must_use]
    pub const fn generate_fragment_implementations(&self) -> bool {
        self.generate_fragment_implementations
    }

    /// Representation of nullable fields in wrapper-flavour models.
    #[must_use]
    pub const fn nullable_field_style(&self) -> NullableFieldStyle {
        self.nullable_field_style
    }

    /// Whether operation models get fluent builders.
    #[must_use]
    pub const fn generate_model_builders(&self) -> bool {
        self.generate_model_builders
    }

    /// Whether schema types get data builders for fakes.
    #[must_use]
    pub const fn generate_data_builders(&self) -> bool {
        self.generate_data_builders
    }

    /// Whether operations get test builders.
    #[must_use]
    pub const fn generate_test_builders(&self) -> bool {
        self.generate_test_builders
    }

    /// Root folders scanned for schema and operation documents.
    #[must_use]
    pub fn source_folders(&self) -> &[Utf8PathBuf] {
        &self.source_folders
    }

    /// Re-export the snapshot as a fully-specified raw configuration.
    ///
    /// Every option is explicit in the result, so resolving it again
    /// yields a snapshot identical to `self`.
    #[must_use]
    pub fn to_raw(&self) -> RawOptions {
        use crate::registry::names;

        RawOptions::builder()
            .set(names::TARGET_LANGUAGE, self.target_language)
            .set(names::CODEGEN_MODELS, self.codegen_models)
            .set(names::USE_SEMANTIC_NAMING, self.use_semantic_naming)
            .set(names::PACKAGE_NAME_PREFIX, self.package_name_prefix.as_str())
            .set(names::OPERATION_ID_STRATEGY, self.operation_id_strategy)
            .set(
                names::CUSTOM_SCALAR_MAPPINGS,
                self.custom_scalar_mappings
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>(),
            )
            .set(names::EXCLUDED_QUERY_FILES, self.excluded_query_files.clone())
            .set(
                names::SEALED_ENUMS_MATCHING,
                self.sealed_enums_matching.sources().to_vec(),
            )
            .set(names::GENERATE_METADATA, self.generate_metadata)
            .set(
                names::ALWAYS_GENERATE_TYPES_MATCHING,
                self.always_generate_types_matching.sources().to_vec(),
            )
            .set(
                names::METADATA_OUTPUT_FILE,
                self.metadata_output_file.clone(),
            )
            .set(names::FLATTEN_MODELS, self.flatten_models)
            .set(
                names::GENERATE_FRAGMENT_IMPLEMENTATIONS,
                self.generate_fragment_implementations,
            )
            .set(names::NULLABLE_FIELD_STYLE, self.nullable_field_style)
            .set(names::GENERATE_MODEL_BUILDERS, self.generate_model_builders)
            .set(names::GENERATE_DATA_BUILDERS, self.generate_data_builders)
            .set(names::GENERATE_TEST_BUILDERS, self.generate_test_builders)
            .set(names::SOURCE_FOLDERS, self.source_folders.clone())
            .build()
    }
}
