//! Option validation and default derivation for the `querygen` client code
//! generator.
//!
//! A build-tool integration hands over a [`RawOptions`] map of untyped,
//! possibly-absent option values. This crate validates the map against the
//! static [`OptionRegistry`] catalogue, derives defaults for unset options
//! in dependency order, and materialises an immutable [`ResolvedOptions`]
//! snapshot for the generator backend. Validation accumulates every
//! detectable violation so the caller can report them all at once;
//! resolution is pure and deterministic.
//!
//! # Example
//!
//! ```rust
//! use querygen_config::{OptionRegistry, RawOptions, names};
//!
//! let raw = RawOptions::builder()
//!     .set(names::TARGET_LANGUAGE, "kotlin")
//!     .set(names::GENERATE_METADATA, true)
//!     .build();
//! let snapshot = OptionRegistry::standard().resolve(&raw)?;
//! assert!(snapshot.generate_metadata());
//! assert_eq!(snapshot.always_generate_types_matching().sources(), [".*"]);
//! # Ok::<_, std::sync::Arc<querygen_config::OptionsError>>(())
//! ```

mod error;
mod options;
mod raw;
mod registry;
mod resolve;
mod snapshot;
mod validate;

pub use error::{AggregatedErrors, OptionsError, OptionsResult};
pub use options::{
    CodegenModels, NullableFieldStyle, OperationIdStrategy, PatternSet, ScalarMapping,
    ScalarMappingError, TargetLanguage,
};
pub use raw::{RawOptions, RawOptionsBuilder, RawValue};
pub use registry::{
    DefaultRule, DependencyRule, DerivationInputs, OptionDescriptor, OptionKind, OptionRegistry,
    OptionValue, RegistryBuilder, names,
};
pub use snapshot::ResolvedOptions;
