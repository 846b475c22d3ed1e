//! Raw, as-supplied option values.
//!
//! A [`RawOptions`] map is what the build-tool integration hands over: a
//! set of option names with untyped values, some of which may be absent.
//! Mutation is confined to [`RawOptionsBuilder`]; once built, a raw
//! configuration is immutable and is consumed read-only by validation and
//! resolution.

mod convert;

use std::collections::BTreeMap;

use camino::Utf8PathBuf;

use crate::options::{
    CodegenModels, NullableFieldStyle, OperationIdStrategy, TargetLanguage,
};

/// Untyped option value as supplied by the caller.
///
/// Values stay untyped at this layer; the validator checks them against
/// the descriptor's kind. Textual values double as enum tokens and single
/// paths, and string lists double as pattern sources, scalar mappings, and
/// path lists.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum RawValue {
    /// Boolean toggle.
    Bool(bool),
    /// Free-form text, an enum token, or a single path.
    Text(String),
    /// Ordered list of strings.
    List(Vec<String>),
    /// Single path supplied as a typed path.
    Path(Utf8PathBuf),
    /// Ordered list of typed paths.
    Paths(Vec<Utf8PathBuf>),
}

impl From<bool> for RawValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<&[&str]> for RawValue {
    fn from(items: &[&str]) -> Self {
        Self::List(items.iter().map(|item| (*item).to_owned()).collect())
    }
}

impl From<Utf8PathBuf> for RawValue {
    fn from(path: Utf8PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Vec<Utf8PathBuf>> for RawValue {
    fn from(paths: Vec<Utf8PathBuf>) -> Self {
        Self::Paths(paths)
    }
}

impl From<TargetLanguage> for RawValue {
    fn from(language: TargetLanguage) -> Self {
        Self::Text(language.as_token().to_owned())
    }
}

impl From<CodegenModels> for RawValue {
    fn from(models: CodegenModels) -> Self {
        Self::Text(models.as_token().to_owned())
    }
}

impl From<OperationIdStrategy> for RawValue {
    fn from(strategy: OperationIdStrategy) -> Self {
        Self::Text(strategy.as_token().to_owned())
    }
}

impl From<NullableFieldStyle> for RawValue {
    fn from(style: NullableFieldStyle) -> Self {
        Self::Text(style.as_token().to_owned())
    }
}

/// Raw configuration: option name to as-supplied value.
///
/// Absence of a name means "not supplied by the caller"; the resolver
/// derives a default for it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RawOptions {
    values: BTreeMap<String, RawValue>,
}

impl RawOptions {
    /// Start building a raw configuration.
    #[must_use]
    pub fn builder() -> RawOptionsBuilder {
        RawOptionsBuilder::default()
    }

    /// Value supplied for `name`, when one was.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.values.get(name)
    }

    /// Whether a value was supplied for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate supplied values in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of supplied values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Builder for [`RawOptions`]; the only mutable phase of a configuration.
///
/// # Examples
///
/// ```
/// use querygen_config::{RawOptions, names};
///
/// let raw = RawOptions::builder()
///     .set(names::TARGET_LANGUAGE, "kotlin")
///     .set(names::GENERATE_METADATA, true)
///     .build();
/// assert_eq!(raw.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RawOptionsBuilder {
    values: BTreeMap<String, RawValue>,
}

impl RawOptionsBuilder {
    /// Supply `value` for `name`, replacing any earlier value.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Remove any value supplied for `name`, reverting it to "unset".
    #[must_use]
    pub fn unset(mut self, name: &str) -> Self {
        self.values.remove(name);
        self
    }

    /// Seal the configuration.
    #[must_use]
    pub fn build(self) -> RawOptions {
        RawOptions {
            values: self.values,
        }
    }
}
