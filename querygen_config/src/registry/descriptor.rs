//! Option descriptors: kinds, default rules, and dependency predicates.

use std::collections::BTreeMap;

use super::OptionValue;

/// Value kind accepted for an option.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum OptionKind {
    /// Boolean toggle.
    Bool,
    /// One token out of a closed set.
    Enum,
    /// Free-form text.
    Text,
    /// Ordered list of free-form strings.
    TextList,
    /// List of `Scalar=target.Type[:adapter]` mapping entries.
    ScalarList,
    /// List of regular-expression sources.
    PatternList,
    /// Single opaque file-system path.
    Path,
    /// Ordered list of opaque file-system paths.
    PathList,
}

/// Read-only view over already-resolved option values.
///
/// Handed to default rules and dependency predicates; the resolver
/// guarantees every declared input is present before a rule runs.
#[derive(Debug)]
pub struct DerivationInputs<'a> {
    values: &'a BTreeMap<&'static str, OptionValue>,
}

impl<'a> DerivationInputs<'a> {
    pub(crate) const fn new(values: &'a BTreeMap<&'static str, OptionValue>) -> Self {
        Self { values }
    }

    /// Resolved boolean value of `name`, when present and boolean.
    #[must_use]
    pub fn bool(&self, name: &str) -> Option<bool> {
        self.values.get(name).and_then(OptionValue::as_bool)
    }

    /// Resolved token (or text) value of `name`, when present and textual.
    #[must_use]
    pub fn token(&self, name: &str) -> Option<&'a str> {
        self.values.get(name).and_then(OptionValue::as_text)
    }
}

/// How an unset option obtains its value.
#[derive(Clone, Debug)]
pub enum DefaultRule {
    /// Fixed value, independent of every other option.
    Constant(OptionValue),
    /// Value computed from other, already-resolved options.
    Derived {
        /// Names of the options the rule reads.
        inputs: &'static [&'static str],
        /// Evaluation over the resolved inputs.
        eval: fn(&DerivationInputs<'_>) -> OptionValue,
    },
}

impl DefaultRule {
    /// Constant default rule holding `value`.
    #[must_use]
    pub fn constant(value: impl Into<OptionValue>) -> Self {
        Self::Constant(value.into())
    }

    /// Derived default rule reading `inputs`.
    #[must_use]
    pub const fn derived(
        inputs: &'static [&'static str],
        eval: fn(&DerivationInputs<'_>) -> OptionValue,
    ) -> Self {
        Self::Derived { inputs, eval }
    }

    /// Option names the rule reads; empty for constants.
    #[must_use]
    pub const fn inputs(&self) -> &'static [&'static str] {
        match self {
            Self::Constant(_) => &[],
            Self::Derived { inputs, .. } => *inputs,
        }
    }

    pub(crate) fn evaluate(&self, inputs: &DerivationInputs<'_>) -> OptionValue {
        match self {
            Self::Constant(value) => value.clone(),
            Self::Derived { eval, .. } => eval(inputs),
        }
    }
}

/// Condition the rest of the configuration must satisfy before an explicit
/// value for an option is accepted.
#[derive(Clone, Debug)]
pub struct DependencyRule {
    inputs: &'static [&'static str],
    check: fn(&DerivationInputs<'_>) -> bool,
    requirement: &'static str,
}

impl DependencyRule {
    /// Predicate over `inputs`, described by the human-readable
    /// `requirement` used in conflict diagnostics.
    #[must_use]
    pub const fn new(
        inputs: &'static [&'static str],
        check: fn(&DerivationInputs<'_>) -> bool,
        requirement: &'static str,
    ) -> Self {
        Self {
            inputs,
            check,
            requirement,
        }
    }

    /// Option names the predicate reads.
    #[must_use]
    pub const fn inputs(&self) -> &'static [&'static str] {
        self.inputs
    }

    /// Human-readable condition, e.g. `targetLanguage = "kotlin"`.
    #[must_use]
    pub const fn requirement(&self) -> &'static str {
        self.requirement
    }

    pub(crate) fn is_satisfied(&self, inputs: &DerivationInputs<'_>) -> bool {
        (self.check)(inputs)
    }
}

/// Static description of a recognised option.
#[derive(Clone, Debug)]
pub struct OptionDescriptor {
    name: &'static str,
    kind: OptionKind,
    enum_tokens: &'static [&'static str],
    default: DefaultRule,
    dependency: Option<DependencyRule>,
    experimental: bool,
}

impl OptionDescriptor {
    /// Describe a non-enumeration option.
    ///
    /// Enumerations carry their token space and are constructed with
    /// [`Self::enumeration`] instead.
    #[must_use]
    pub fn new(name: &'static str, kind: OptionKind, default: DefaultRule) -> Self {
        debug_assert!(
            kind != OptionKind::Enum,
            "enumerations must be constructed with OptionDescriptor::enumeration"
        );
        Self {
            name,
            kind,
            enum_tokens: &[],
            default,
            dependency: None,
            experimental: false,
        }
    }

    /// Describe an enumeration option accepting `tokens`.
    #[must_use]
    pub fn enumeration(
        name: &'static str,
        tokens: &'static [&'static str],
        default: DefaultRule,
    ) -> Self {
        debug_assert!(!tokens.is_empty(), "an enumeration needs at least one token");
        Self {
            name,
            kind: OptionKind::Enum,
            enum_tokens: tokens,
            default,
            dependency: None,
            experimental: false,
        }
    }

    /// Gate explicit values behind `dependency`.
    #[must_use]
    pub fn with_dependency(mut self, dependency: DependencyRule) -> Self {
        self.dependency = Some(dependency);
        self
    }

    /// Mark the option as experimental.
    ///
    /// Carried through for downstream documentation and warnings; the
    /// option behaves like any other.
    #[must_use]
    pub const fn experimental(mut self) -> Self {
        self.experimental = true;
        self
    }

    /// Unique option name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Value kind the option accepts.
    #[must_use]
    pub const fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Accepted tokens; empty unless [`Self::kind`] is [`OptionKind::Enum`].
    #[must_use]
    pub const fn enum_tokens(&self) -> &'static [&'static str] {
        self.enum_tokens
    }

    /// Rule producing the option's value when unset.
    #[must_use]
    pub const fn default(&self) -> &DefaultRule {
        &self.default
    }

    /// Predicate gating explicit values, when the option has one.
    #[must_use]
    pub const fn dependency(&self) -> Option<&DependencyRule> {
        self.dependency.as_ref()
    }

    /// Whether the option carries the experimental marker.
    #[must_use]
    pub const fn is_experimental(&self) -> bool {
        self.experimental
    }
}
