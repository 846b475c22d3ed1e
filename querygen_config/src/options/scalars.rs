//! Custom scalar mapping entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mapping from a schema scalar name to its target representation.
///
/// Entries are supplied as `Scalar=target.Type`, optionally followed by
/// `:adapter.Reference` naming the adapter used to convert values at
/// runtime. The mapping is opaque to this crate beyond its shape; the
/// generator backend resolves the target names.
///
/// # Examples
///
/// ```
/// use querygen_config::ScalarMapping;
///
/// let mapping: ScalarMapping = "DateTime=java.time.Instant".parse()?;
/// assert_eq!(mapping.scalar(), "DateTime");
/// assert_eq!(mapping.target(), "java.time.Instant");
/// assert!(mapping.adapter().is_none());
/// # Ok::<_, querygen_config::ScalarMappingError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScalarMapping {
    scalar: String,
    target: String,
    adapter: Option<String>,
}

impl ScalarMapping {
    /// Map `scalar` to `target` without an adapter.
    #[must_use]
    pub fn new(scalar: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            scalar: scalar.into(),
            target: target.into(),
            adapter: None,
        }
    }

    /// Attach an adapter reference to the mapping.
    #[must_use]
    pub fn with_adapter(mut self, adapter: impl Into<String>) -> Self {
        self.adapter = Some(adapter.into());
        self
    }

    /// Schema scalar name this entry maps.
    #[must_use]
    pub fn scalar(&self) -> &str {
        &self.scalar
    }

    /// Target representation name.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Adapter reference, when one was supplied.
    #[must_use]
    pub fn adapter(&self) -> Option<&str> {
        self.adapter.as_deref()
    }
}

/// Parse failure for a scalar mapping entry.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("scalar mapping '{entry}' must take the form Scalar=target.Type[:adapter]")]
pub struct ScalarMappingError {
    /// Entry text that failed to parse.
    entry: String,
}

impl ScalarMappingError {
    /// Entry text that failed to parse.
    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }
}

impl FromStr for ScalarMapping {
    type Err = ScalarMappingError;

    fn from_str(entry: &str) -> Result<Self, Self::Err> {
        let malformed = || ScalarMappingError {
            entry: entry.to_owned(),
        };
        let (scalar, rest) = entry.split_once('=').ok_or_else(malformed)?;
        let (target, adapter) = rest
            .split_once(':')
            .map_or((rest, None), |(target, adapter)| (target, Some(adapter)));
        if scalar.trim().is_empty()
            || target.trim().is_empty()
            || adapter.is_some_and(|a| a.trim().is_empty())
        {
            return Err(malformed());
        }
        let mapping = Self::new(scalar.trim(), target.trim());
        Ok(match adapter {
            Some(reference) => mapping.with_adapter(reference.trim()),
            None => mapping,
        })
    }
}

impl TryFrom<String> for ScalarMapping {
    type Error = ScalarMappingError;

    fn try_from(entry: String) -> Result<Self, Self::Error> {
        entry.parse()
    }
}

impl From<ScalarMapping> for String {
    fn from(mapping: ScalarMapping) -> Self {
        mapping.to_string()
    }
}

impl fmt::Display for ScalarMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.scalar, self.target)?;
        match &self.adapter {
            Some(adapter) => write!(f, ":{adapter}"),
            None => Ok(()),
        }
    }
}
