//! The standard option catalogue for the generator.

use camino::Utf8PathBuf;

use crate::error::OptionsError;
use crate::options::{
    CodegenModels, NullableFieldStyle, OperationIdStrategy, PatternSet, TargetLanguage,
};

use super::{
    DefaultRule, DependencyRule, DerivationInputs, OptionDescriptor, OptionKind, OptionRegistry,
    OptionValue, RegistryBuilder,
};

/// Names of the options in the standard catalogue.
///
/// These are the literal keys accepted from the build-tool integration.
pub mod names {
    /// Output-language flavour: `java` or `kotlin`.
    pub const TARGET_LANGUAGE: &str = "targetLanguage";
    /// Shape of generated operation models.
    pub const CODEGEN_MODELS: &str = "codegenModels";
    /// Whether generated names follow schema semantics (`HeroQuery` rather
    /// than `Hero`).
    pub const USE_SEMANTIC_NAMING: &str = "useSemanticNaming";
    /// Prefix prepended to every generated package name.
    pub const PACKAGE_NAME_PREFIX: &str = "packageNamePrefix";
    /// Strategy for persisted operation identifiers.
    pub const OPERATION_ID_STRATEGY: &str = "operationIdStrategy";
    /// Custom scalar mapping entries, `Scalar=target.Type[:adapter]`.
    pub const CUSTOM_SCALAR_MAPPINGS: &str = "customScalarMappings";
    /// Query documents excluded from generation, as opaque glob strings.
    pub const EXCLUDED_QUERY_FILES: &str = "excludedQueryFiles";
    /// Schema enums generated as sealed classes when their name matches.
    pub const SEALED_ENUMS_MATCHING: &str = "sealedEnumsMatching";
    /// Whether to emit a metadata artefact for downstream modules.
    pub const GENERATE_METADATA: &str = "generateMetadata";
    /// Schema types generated even when unused by any operation.
    pub const ALWAYS_GENERATE_TYPES_MATCHING: &str = "alwaysGenerateTypesMatching";
    /// Where the metadata artefact is written.
    pub const METADATA_OUTPUT_FILE: &str = "metadataOutputFile";
    /// Whether nested model types are hoisted to shorter paths.
    pub const FLATTEN_MODELS: &str = "flattenModels";
    /// Whether fragments get concrete implementation classes.
    pub const GENERATE_FRAGMENT_IMPLEMENTATIONS: &str = "generateFragmentImplementations";
    /// Representation of nullable fields in wrapper-flavour models.
    pub const NULLABLE_FIELD_STYLE: &str = "nullableFieldStyle";
    /// Whether operation models get fluent builders.
    pub const GENERATE_MODEL_BUILDERS: &str = "generateModelBuilders";
    /// Whether schema types get data builders for fakes.
    pub const GENERATE_DATA_BUILDERS: &str = "generateDataBuilders";
    /// Whether operations get test builders.
    pub const GENERATE_TEST_BUILDERS: &str = "generateTestBuilders";
    /// Root folders scanned for schema and operation documents.
    pub const SOURCE_FOLDERS: &str = "sourceFolders";
}

/// Build the standard catalogue.
///
/// Registration order is the validation order reported to users, so the
/// flavour selectors come first and pass-through lists last.
pub(super) fn standard_catalog() -> Result<OptionRegistry, OptionsError> {
    let mut builder = RegistryBuilder::new();
    builder.register(OptionDescriptor::enumeration(
        names::TARGET_LANGUAGE,
        TargetLanguage::TOKENS,
        DefaultRule::constant(TargetLanguage::Java.as_token()),
    ))?;
    builder.register(OptionDescriptor::enumeration(
        names::CODEGEN_MODELS,
        CodegenModels::TOKENS,
        DefaultRule::constant(CodegenModels::OperationBased.as_token()),
    ))?;
    builder.register(OptionDescriptor::new(
        names::USE_SEMANTIC_NAMING,
        OptionKind::Bool,
        DefaultRule::constant(true),
    ))?;
    builder.register(OptionDescriptor::new(
        names::PACKAGE_NAME_PREFIX,
        OptionKind::Text,
        DefaultRule::constant(""),
    ))?;
    builder.register(OptionDescriptor::enumeration(
        names::OPERATION_ID_STRATEGY,
        OperationIdStrategy::TOKENS,
        DefaultRule::constant(OperationIdStrategy::Sha256.as_token()),
    ))?;
    builder.register(OptionDescriptor::new(
        names::CUSTOM_SCALAR_MAPPINGS,
        OptionKind::ScalarList,
        DefaultRule::Constant(OptionValue::Scalars(Vec::new())),
    ))?;
    builder.register(OptionDescriptor::new(
        names::EXCLUDED_QUERY_FILES,
        OptionKind::TextList,
        DefaultRule::Constant(OptionValue::TextList(Vec::new())),
    ))?;
    builder.register(
        OptionDescriptor::new(
            names::SEALED_ENUMS_MATCHING,
            OptionKind::PatternList,
            DefaultRule::constant(PatternSet::empty()),
        )
        .with_dependency(requires_language(TargetLanguage::Kotlin)),
    )?;
    builder.register(OptionDescriptor::new(
        names::GENERATE_METADATA,
        OptionKind::Bool,
        DefaultRule::constant(false),
    ))?;
    builder.register(
        OptionDescriptor::new(
            names::ALWAYS_GENERATE_TYPES_MATCHING,
            OptionKind::PatternList,
            DefaultRule::derived(&[names::GENERATE_METADATA], default_always_generate),
        )
        .experimental(),
    )?;
    builder.register(OptionDescriptor::new(
        names::METADATA_OUTPUT_FILE,
        OptionKind::Path,
        DefaultRule::derived(&[names::GENERATE_METADATA], default_metadata_output),
    ))?;
    builder.register(OptionDescriptor::new(
        names::FLATTEN_MODELS,
        OptionKind::Bool,
        DefaultRule::derived(&[names::CODEGEN_MODELS], default_flatten_models),
    ))?;
    builder.register(OptionDescriptor::new(
        names::GENERATE_FRAGMENT_IMPLEMENTATIONS,
        OptionKind::Bool,
        DefaultRule::constant(false),
    ))?;
    builder.register(
        OptionDescriptor::enumeration(
            names::NULLABLE_FIELD_STYLE,
            NullableFieldStyle::TOKENS,
            DefaultRule::derived(&[names::TARGET_LANGUAGE], default_nullable_field_style),
        )
        .with_dependency(requires_language(TargetLanguage::Java)),
    )?;
    builder.register(
        OptionDescriptor::new(
            names::GENERATE_MODEL_BUILDERS,
            OptionKind::Bool,
            DefaultRule::constant(false),
        )
        .with_dependency(requires_language(TargetLanguage::Java)),
    )?;
    builder.register(
        OptionDescriptor::new(
            names::GENERATE_DATA_BUILDERS,
            OptionKind::Bool,
            DefaultRule::constant(false),
        )
        .with_dependency(requires_language(TargetLanguage::Kotlin)),
    )?;
    builder.register(
        OptionDescriptor::new(
            names::GENERATE_TEST_BUILDERS,
            OptionKind::Bool,
            DefaultRule::constant(false),
        )
        .with_dependency(requires_language(TargetLanguage::Kotlin))
        .experimental(),
    )?;
    builder.register(OptionDescriptor::new(
        names::SOURCE_FOLDERS,
        OptionKind::PathList,
        DefaultRule::Constant(OptionValue::Paths(vec![Utf8PathBuf::from(
            "src/main/graphql",
        )])),
    ))?;
    builder.finish()
}

fn requires_language(language: TargetLanguage) -> DependencyRule {
    match language {
        TargetLanguage::Java => DependencyRule::new(
            &[names::TARGET_LANGUAGE],
            language_is_java,
            "targetLanguage = \"java\"",
        ),
        TargetLanguage::Kotlin => DependencyRule::new(
            &[names::TARGET_LANGUAGE],
            language_is_kotlin,
            "targetLanguage = \"kotlin\"",
        ),
    }
}

fn language_is_java(inputs: &DerivationInputs<'_>) -> bool {
    inputs.token(names::TARGET_LANGUAGE) == Some(TargetLanguage::Java.as_token())
}

fn language_is_kotlin(inputs: &DerivationInputs<'_>) -> bool {
    inputs.token(names::TARGET_LANGUAGE) == Some(TargetLanguage::Kotlin.as_token())
}

fn default_always_generate(inputs: &DerivationInputs<'_>) -> OptionValue {
    // Metadata consumers downstream may reference any schema type.
    if inputs.bool(names::GENERATE_METADATA).unwrap_or(false) {
        OptionValue::Patterns(PatternSet::match_all())
    } else {
        OptionValue::Patterns(PatternSet::empty())
    }
}

fn default_metadata_output(inputs: &DerivationInputs<'_>) -> OptionValue {
    if inputs.bool(names::GENERATE_METADATA).unwrap_or(false) {
        OptionValue::Path(Utf8PathBuf::from("build/metadata/querygen.json"))
    } else {
        // Empty path: the generator writes no artefact.
        OptionValue::Path(Utf8PathBuf::new())
    }
}

fn default_flatten_models(inputs: &DerivationInputs<'_>) -> OptionValue {
    // Response-based models encode the response shape in their paths;
    // flattening would collapse distinct positions onto one name.
    let response_based =
        inputs.token(names::CODEGEN_MODELS) == Some(CodegenModels::ResponseBased.as_token());
    OptionValue::Bool(!response_based)
}

fn default_nullable_field_style(inputs: &DerivationInputs<'_>) -> OptionValue {
    let style = if language_is_java(inputs) {
        NullableFieldStyle::Annotated
    } else {
        NullableFieldStyle::None
    };
    OptionValue::token(style.as_token())
}
