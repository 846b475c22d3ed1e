//! Pattern lists matched against schema type names.

use regex::RegexSet;
use serde::{Deserialize, Serialize};

/// Ordered list of regular-expression sources.
///
/// Sources are compiled and checked at the option-validation boundary; a
/// `PatternSet` inside a resolved configuration only carries sources known
/// to compile. Equality and serialisation operate on the sources, keeping
/// snapshots cheaply comparable.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternSet {
    sources: Vec<String>,
}

impl PatternSet {
    /// Pattern set over the given sources.
    #[must_use]
    pub const fn new(sources: Vec<String>) -> Self {
        Self { sources }
    }

    /// Pattern set that matches nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Pattern set that matches every type name.
    #[must_use]
    pub fn match_all() -> Self {
        Self {
            sources: vec![String::from(".*")],
        }
    }

    /// The regular-expression sources, in supplied order.
    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Number of patterns in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the set holds no patterns (and therefore matches nothing).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Compile the sources into a [`RegexSet`] for matching.
    ///
    /// # Errors
    ///
    /// Returns the first [`regex::Error`] raised by a source that does not
    /// compile. Sets taken from a resolved configuration never fail here.
    pub fn to_regex_set(&self) -> Result<RegexSet, regex::Error> {
        RegexSet::new(&self.sources)
    }
}

impl From<Vec<String>> for PatternSet {
    fn from(sources: Vec<String>) -> Self {
        Self::new(sources)
    }
}

impl FromIterator<String> for PatternSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
