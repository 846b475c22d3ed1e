//! Default resolution in derivation order.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{OptionsError, OptionsResult};
use crate::raw::RawOptions;
use crate::registry::{DerivationInputs, OptionRegistry, OptionValue};
use crate::snapshot::ResolvedOptions;
use crate::validate::coerce;

impl OptionRegistry {
    /// Validate `raw` and resolve every registered option to a typed value.
    ///
    /// Explicitly supplied values win; unset options are derived by their
    /// default rule, evaluated against the already-resolved values of its
    /// declared inputs. Resolution is a pure function of `raw` and the
    /// registry: resolving the same configuration twice, in any
    /// interleaving, yields identical snapshots.
    ///
    /// # Errors
    ///
    /// * The accumulated validation violations, as the single error itself
    ///   or an [`OptionsError::Aggregate`] of two or more. No derivation
    ///   happens when validation fails.
    /// * [`OptionsError::CycleInDerivation`] when an input is not resolved
    ///   before its dependent. This is re-checked defensively on every
    ///   walk even though [`crate::RegistryBuilder::finish`] already
    ///   rejects cyclic catalogues.
    ///
    /// # Examples
    ///
    /// ```
    /// use querygen_config::{OptionRegistry, RawOptions, names};
    ///
    /// let raw = RawOptions::builder()
    ///     .set(names::GENERATE_METADATA, true)
    ///     .build();
    /// let snapshot = OptionRegistry::standard().resolve(&raw)?;
    /// assert_eq!(
    ///     snapshot.always_generate_types_matching().sources(),
    ///     [".*"]
    /// );
    /// # Ok::<_, std::sync::Arc<querygen_config::OptionsError>>(())
    /// ```
    pub fn resolve(&self, raw: &RawOptions) -> OptionsResult<ResolvedOptions> {
        if let Some(error) = OptionsError::try_aggregate(self.validate(raw)) {
            return Err(Arc::new(error));
        }
        let values = resolved_values(self, raw)?;
        let snapshot = ResolvedOptions::from_values(&values)?;
        debug!(options = values.len(), "configuration snapshot resolved");
        Ok(snapshot)
    }
}

/// Effective value of every option: the explicit value where it coerces
/// cleanly, the derived default otherwise.
///
/// This is the "partially resolved" view dependency predicates are
/// evaluated against during validation; invalid explicit values fall back
/// to the default so one bad entry cannot poison unrelated checks.
pub(crate) fn effective_values(
    registry: &OptionRegistry,
    raw: &RawOptions,
) -> BTreeMap<&'static str, OptionValue> {
    let mut values = BTreeMap::new();
    for descriptor in registry.derivation_order() {
        let explicit = raw
            .get(descriptor.name())
            .and_then(|value| coerce(descriptor, value).ok());
        let value = explicit.unwrap_or_else(|| {
            descriptor
                .default()
                .evaluate(&DerivationInputs::new(&values))
        });
        values.insert(descriptor.name(), value);
    }
    values
}

/// Strict resolution walk over a validator-approved configuration.
fn resolved_values(
    registry: &OptionRegistry,
    raw: &RawOptions,
) -> OptionsResult<BTreeMap<&'static str, OptionValue>> {
    let mut values = BTreeMap::new();
    for descriptor in registry.derivation_order() {
        let unresolved = descriptor
            .default()
            .inputs()
            .iter()
            .find(|input| !values.contains_key(**input));
        if let Some(input) = unresolved {
            return Err(Arc::new(OptionsError::CycleInDerivation {
                cycle: format!("{} -> {input}", descriptor.name()),
            }));
        }
        let explicit = match raw.get(descriptor.name()) {
            Some(value) => match coerce(descriptor, value) {
                Ok(typed) => Some(typed),
                // Unreachable after a clean validation pass; surface the
                // violations rather than masking them.
                Err(errors) => {
                    return Err(Arc::new(OptionsError::aggregate(errors)));
                }
            },
            None => None,
        };
        let value = explicit.unwrap_or_else(|| {
            descriptor
                .default()
                .evaluate(&DerivationInputs::new(&values))
        });
        values.insert(descriptor.name(), value);
    }
    Ok(values)
}
