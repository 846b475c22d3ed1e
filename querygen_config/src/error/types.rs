//! Primary error enum for the option engine.

use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Errors that can occur while building the option registry, validating a
/// raw configuration, or resolving defaults.
///
/// Registry-construction variants (`DuplicateOption`, `UnknownInput`,
/// `CycleInDerivation`) indicate catalogue defects and are fatal; the
/// validation variants are accumulated and reported together so callers can
/// surface every problem in one pass.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OptionsError {
    /// An option name was registered twice.
    #[error("option '{name}' is already registered")]
    DuplicateOption {
        /// Name that was offered to the registry a second time.
        name: &'static str,
    },

    /// A default rule or dependency predicate names an unregistered option.
    #[error("option '{option}' declares unregistered input '{input}'")]
    UnknownInput {
        /// Option whose rule carries the dangling reference.
        option: &'static str,
        /// Input name absent from the registry.
        input: &'static str,
    },

    /// The raw configuration supplied a name the registry does not know.
    #[error("unknown option '{name}'")]
    UnknownOption {
        /// Name as supplied by the caller.
        name: String,
    },

    /// A supplied value does not match the descriptor's kind or token space.
    #[error("invalid value for option '{option}': {message}")]
    InvalidValue {
        /// Option the value was supplied for.
        option: String,
        /// Human-readable explanation of the mismatch.
        message: String,
    },

    /// An option was explicitly set while its dependency predicate is false.
    #[error("option '{option}' conflicts with the configuration: requires {requirement}")]
    ConflictingOption {
        /// Option that was explicitly supplied.
        option: String,
        /// Condition the rest of the configuration must satisfy.
        requirement: String,
    },

    /// A pattern-list entry failed to compile as a regular expression.
    #[error("pattern '{pattern}' in option '{option}' does not compile: {source}")]
    PatternCompile {
        /// Pattern-list option containing the entry.
        option: String,
        /// Source text of the offending pattern.
        pattern: String,
        /// Compilation failure reported by the regex engine.
        #[source]
        source: Box<regex::Error>,
    },

    /// The default-rule dependency graph cannot be topologically ordered.
    #[error("cycle in default derivation: {cycle}")]
    CycleInDerivation {
        /// Options participating in (or blocked behind) the cycle.
        cycle: String,
    },

    /// Resolved values failed to materialise into a snapshot.
    ///
    /// Like [`Self::CycleInDerivation`] this is an internal-consistency
    /// check; it is unreachable with a well-formed catalogue.
    #[error("failed to materialise configuration snapshot: {source}")]
    Snapshot {
        /// Underlying serialisation failure.
        #[source]
        source: Box<serde_json::Error>,
    },

    /// Multiple violations were detected in a single validation pass.
    #[error("multiple configuration errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}
