//! Aggregation container for multiple `OptionsError` values.

use std::{error::Error, fmt, sync::Arc};

use super::OptionsError;

/// Collection of [`OptionsError`]s accumulated during a single validation
/// pass.
///
/// Displays one numbered line per error so build tools can surface the full
/// list as user-visible diagnostics.
///
/// # Examples
///
/// ```
/// use querygen_config::OptionsError;
///
/// let e = OptionsError::aggregate(vec![
///     OptionsError::UnknownOption { name: "generateKoans".into() },
///     OptionsError::InvalidValue {
///         option: "useSemanticNaming".into(),
///         message: "expected a boolean".into(),
///     },
/// ]);
/// if let OptionsError::Aggregate(agg) = e {
///     assert_eq!(agg.len(), 2);
/// }
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<Arc<OptionsError>>);

impl AggregatedErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<Arc<OptionsError>>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &OptionsError> {
        self.0.iter().map(Arc::as_ref)
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the aggregation holds no errors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl<'a> IntoIterator for &'a AggregatedErrors {
    type Item = &'a OptionsError;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, Arc<OptionsError>>,
        fn(&'a Arc<OptionsError>) -> &'a OptionsError,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().map(Arc::as_ref)
    }
}

impl IntoIterator for AggregatedErrors {
    type Item = Arc<OptionsError>;
    type IntoIter = std::vec::IntoIter<Arc<OptionsError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
