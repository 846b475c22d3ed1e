//! Validation of raw configurations against the registry.

mod coerce;

pub(crate) use coerce::coerce;

use tracing::warn;

use crate::error::OptionsError;
use crate::raw::RawOptions;
use crate::registry::{DerivationInputs, OptionRegistry};
use crate::resolve::effective_values;

impl OptionRegistry {
    /// Validate the explicitly supplied values in `raw`.
    ///
    /// All detectable problems are accumulated in one pass and returned
    /// together, one entry per violation, so the caller can surface the
    /// complete list to the user at once. An empty list means the
    /// configuration is acceptable and can be resolved.
    ///
    /// Three rule families are evaluated, in registry order:
    ///
    /// * **Kind checks**: the supplied value must match the descriptor's
    ///   kind and, for enumerations, one of its tokens.
    /// * **Dependency checks**: an option gated by a dependency predicate
    ///   is rejected when it is explicitly set to anything other than its
    ///   own derived default while the predicate is false. Re-supplying
    ///   the value derivation would produce is accepted, so a resolved
    ///   snapshot can be fed back through validation unchanged. Predicates
    ///   are evaluated against the partially resolved configuration, so a
    ///   gate keyed on a defaulted flavour selector behaves the same as on
    ///   an explicit one.
    /// * **Entry checks**: pattern-list entries must compile and scalar
    ///   mappings must parse; each offending entry is reported
    ///   individually.
    ///
    /// Names not present in the registry are reported as
    /// [`OptionsError::UnknownOption`] after the registered options, in
    /// name order.
    #[must_use]
    pub fn validate(&self, raw: &RawOptions) -> Vec<OptionsError> {
        let effective = effective_values(self, raw);
        let view = DerivationInputs::new(&effective);
        let mut violations = Vec::new();
        for descriptor in self.iter() {
            let Some(value) = raw.get(descriptor.name()) else {
                continue;
            };
            match coerce(descriptor, value) {
                Ok(typed) => {
                    if descriptor.is_experimental() {
                        warn!(
                            option = descriptor.name(),
                            "experimental option explicitly supplied"
                        );
                    }
                    if let Some(dependency) = descriptor.dependency() {
                        let derived = descriptor.default().evaluate(&view);
                        if !dependency.is_satisfied(&view) && typed != derived {
                            violations.push(OptionsError::ConflictingOption {
                                option: descriptor.name().to_owned(),
                                requirement: dependency.requirement().to_owned(),
                            });
                        }
                    }
                }
                Err(errors) => violations.extend(errors),
            }
        }
        for (name, _) in raw.iter().filter(|(name, _)| !self.contains(name)) {
            violations.push(OptionsError::UnknownOption {
                name: name.to_owned(),
            });
        }
        violations
    }
}

#[cfg(test)]
mod tests;
