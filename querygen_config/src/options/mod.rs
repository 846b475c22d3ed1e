//! Domain value types for the recognised options.
//!
//! The enum-kinded options are modelled as closed Rust enumerations rather
//! than free-form strings, so unrecognised tokens are rejected at the
//! validation boundary instead of leaking into the generator backend.

mod patterns;
mod scalars;

pub use patterns::PatternSet;
pub use scalars::{ScalarMapping, ScalarMappingError};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Output-language flavour targeted by the generator.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetLanguage {
    /// Generated models carry explicit nullability wrapper types.
    Java,
    /// Generated models use native nullable types and closed-variant
    /// (sealed) enums.
    Kotlin,
}

impl TargetLanguage {
    /// Tokens accepted for this option, in catalogue order.
    pub const TOKENS: &'static [&'static str] = &["java", "kotlin"];

    /// Canonical token for the variant.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Kotlin => "kotlin",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Shape of the generated operation models.
///
/// `ResponseBased` models mirror the response tree one type per selection
/// set; the other modes share types across operations and tolerate flatter
/// module paths.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CodegenModels {
    /// One model per operation, shaped after the query document.
    OperationBased,
    /// One model per distinct response shape.
    ResponseBased,
    /// Transitional mode kept for projects migrating between the two.
    Compat,
}

impl CodegenModels {
    /// Tokens accepted for this option, in catalogue order.
    pub const TOKENS: &'static [&'static str] = &["operationBased", "responseBased", "compat"];

    /// Canonical token for the variant.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::OperationBased => "operationBased",
            Self::ResponseBased => "responseBased",
            Self::Compat => "compat",
        }
    }
}

impl fmt::Display for CodegenModels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Strategy used to derive persisted operation identifiers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationIdStrategy {
    /// SHA-256 digest of the operation document.
    Sha256,
    /// MD5 digest of the operation document.
    Md5,
    /// Path of the operation file relative to its source folder.
    RelativePath,
}

impl OperationIdStrategy {
    /// Tokens accepted for this option, in catalogue order.
    pub const TOKENS: &'static [&'static str] = &["sha256", "md5", "relativePath"];

    /// Canonical token for the variant.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Md5 => "md5",
            Self::RelativePath => "relativePath",
        }
    }
}

impl fmt::Display for OperationIdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// How nullable schema fields are represented in generated wrapper-flavour
/// models.
///
/// Only meaningful when [`TargetLanguage::Java`] is targeted; the native
/// flavour expresses nullability directly in the type system.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NullableFieldStyle {
    /// No wrapper; fields are plain references.
    None,
    /// Fields annotated with `@Nullable` / `@NotNull`.
    Annotated,
    /// Fields wrapped in the generator runtime's optional type.
    RuntimeOptional,
    /// Fields wrapped in Guava's `Optional`.
    GuavaOptional,
    /// Fields wrapped in `java.util.Optional`.
    JavaOptional,
    /// Input-object style wrappers distinguishing absent from null.
    InputType,
}

impl NullableFieldStyle {
    /// Tokens accepted for this option, in catalogue order.
    pub const TOKENS: &'static [&'static str] = &[
        "none",
        "annotated",
        "runtimeOptional",
        "guavaOptional",
        "javaOptional",
        "inputType",
    ];

    /// Canonical token for the variant.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Annotated => "annotated",
            Self::RuntimeOptional => "runtimeOptional",
            Self::GuavaOptional => "guavaOptional",
            Self::JavaOptional => "javaOptional",
            Self::InputType => "inputType",
        }
    }
}

impl fmt::Display for NullableFieldStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

#[cfg(test)]
mod tests;
