//! Error types produced by option validation and resolution.

mod aggregate;
mod constructors;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::OptionsError;

use std::sync::Arc;

/// Convenience alias for results carrying a shared [`OptionsError`].
pub type OptionsResult<T> = Result<T, Arc<OptionsError>>;
