//! Fully-typed option values.

use camino::Utf8PathBuf;
use serde::Serialize;

use crate::options::{PatternSet, ScalarMapping};

/// Typed value for a single option, produced by validation or default
/// derivation.
///
/// Serialises transparently as the inner value, so a map of option name to
/// `OptionValue` has the same JSON shape the snapshot deserialises from.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum OptionValue {
    /// Boolean toggle value.
    Bool(bool),
    /// Free-form text or an enumeration token.
    Text(String),
    /// Ordered list of strings.
    TextList(Vec<String>),
    /// Parsed custom scalar mappings.
    Scalars(Vec<ScalarMapping>),
    /// Validated pattern sources.
    Patterns(PatternSet),
    /// Opaque path value.
    Path(Utf8PathBuf),
    /// Ordered list of opaque paths.
    Paths(Vec<Utf8PathBuf>),
}

impl OptionValue {
    /// Text value holding `token`.
    #[must_use]
    pub fn token(token: &str) -> Self {
        Self::Text(token.to_owned())
    }

    /// The boolean payload, when this value is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// The text payload, when this value is text or a token.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for OptionValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<PatternSet> for OptionValue {
    fn from(patterns: PatternSet) -> Self {
        Self::Patterns(patterns)
    }
}

impl From<Utf8PathBuf> for OptionValue {
    fn from(path: Utf8PathBuf) -> Self {
        Self::Path(path)
    }
}
