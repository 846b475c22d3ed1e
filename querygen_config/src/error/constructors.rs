//! Constructors and accessors for `OptionsError`.

use std::sync::Arc;

use super::{AggregatedErrors, OptionsError};

impl OptionsError {
    /// Tries to build an [`OptionsError`] from an iterator of errors.
    ///
    /// The iterator is consumed eagerly. It returns:
    /// * `None` when no errors are supplied;
    /// * the inner error when a single [`Arc`] is uniquely owned;
    /// * [`Self::Aggregate`] containing that single [`Arc`] when the error
    ///   is already shared; and
    /// * [`Self::Aggregate`] combining every error for two or more inputs.
    ///
    /// # Panics
    ///
    /// This function never panics. If `Arc::try_unwrap` detects outstanding
    /// references when a single error is provided, the error is wrapped in
    /// an aggregate instead.
    #[must_use]
    pub fn try_aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        let mut arcs: Vec<Arc<Self>> = errors.into_iter().map(Into::into).collect();
        if arcs.is_empty() {
            return None;
        }
        Some(if arcs.len() == 1 {
            let last = arcs.pop()?;
            match Arc::try_unwrap(last) {
                Ok(err) => err,
                Err(shared) => Self::Aggregate(Box::new(AggregatedErrors::new(vec![shared]))),
            }
        } else {
            Self::Aggregate(Box::new(AggregatedErrors::new(arcs)))
        })
    }

    /// Build an [`OptionsError`] from at least one error.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty. Use [`OptionsError::try_aggregate`] to
    /// avoid panicking when the error list may be empty.
    #[must_use]
    #[track_caller]
    pub fn aggregate<I, E>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        Self::try_aggregate(errors).map_or_else(
            || panic!("aggregate requires at least one error"),
            |err| err,
        )
    }

    /// Name of the option the error refers to, where one applies.
    ///
    /// Registry-wide failures ([`Self::CycleInDerivation`],
    /// [`Self::Snapshot`], [`Self::Aggregate`]) return `None`.
    #[must_use]
    pub fn option_name(&self) -> Option<&str> {
        match self {
            Self::DuplicateOption { name } => Some(name),
            Self::UnknownInput { option, .. } => Some(option),
            Self::UnknownOption { name } => Some(name),
            Self::InvalidValue { option, .. }
            | Self::ConflictingOption { option, .. }
            | Self::PatternCompile { option, .. } => Some(option),
            Self::CycleInDerivation { .. } | Self::Snapshot { .. } | Self::Aggregate(_) => None,
        }
    }
}
