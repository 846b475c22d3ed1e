//! Static catalogue of recognised options.
//!
//! The registry is built once per process through [`RegistryBuilder`] and
//! is read-only thereafter, so concurrent generation invocations can share
//! it without locking. Construction validates the catalogue itself:
//! duplicate names, dangling rule inputs, and cycles in the default-rule
//! graph are all rejected before the first configuration is validated.

mod catalog;
mod descriptor;
mod value;

pub use catalog::names;
pub use descriptor::{
    DefaultRule, DependencyRule, DerivationInputs, OptionDescriptor, OptionKind,
};
pub use value::OptionValue;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::error::OptionsError;

/// Accumulates descriptors and seals them into an [`OptionRegistry`].
///
/// # Examples
///
/// ```
/// use querygen_config::{DefaultRule, OptionDescriptor, OptionKind, RegistryBuilder};
///
/// let mut builder = RegistryBuilder::new();
/// builder.register(OptionDescriptor::new(
///     "generateStubs",
///     OptionKind::Bool,
///     DefaultRule::constant(false),
/// ))?;
/// let registry = builder.finish()?;
/// assert!(registry.contains("generateStubs"));
/// # Ok::<_, querygen_config::OptionsError>(())
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    options: Vec<OptionDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `descriptor` under its name.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::DuplicateOption`] when the name is already
    /// taken.
    pub fn register(&mut self, descriptor: OptionDescriptor) -> Result<(), OptionsError> {
        let name = descriptor.name();
        if self.index.contains_key(name) {
            return Err(OptionsError::DuplicateOption { name });
        }
        self.index.insert(name, self.options.len());
        self.options.push(descriptor);
        Ok(())
    }

    /// Seal the catalogue.
    ///
    /// Checks that every default-rule and dependency input names a
    /// registered option and computes the derivation order used by the
    /// resolver.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::UnknownInput`] for a dangling input name and
    /// [`OptionsError::CycleInDerivation`] when the default-rule graph has
    /// no topological order.
    pub fn finish(self) -> Result<OptionRegistry, OptionsError> {
        let Self { options, index } = self;
        for option in &options {
            let rule_inputs = option.default().inputs().iter().copied();
            let dependency_inputs = option
                .dependency()
                .map_or(&[][..], DependencyRule::inputs)
                .iter()
                .copied();
            for input in rule_inputs.chain(dependency_inputs) {
                if !index.contains_key(input) {
                    return Err(OptionsError::UnknownInput {
                        option: option.name(),
                        input,
                    });
                }
            }
        }
        let derivation_order = derivation_order(&options)?;
        Ok(OptionRegistry {
            options,
            index,
            derivation_order,
        })
    }
}

/// Topological order over default-rule inputs.
///
/// Deterministic: among the options whose inputs are all resolved, the one
/// registered first is scheduled next.
fn derivation_order(options: &[OptionDescriptor]) -> Result<Vec<usize>, OptionsError> {
    let mut order = Vec::with_capacity(options.len());
    let mut resolved: HashSet<&'static str> = HashSet::with_capacity(options.len());
    let mut remaining: Vec<(usize, &OptionDescriptor)> = options.iter().enumerate().collect();
    while !remaining.is_empty() {
        let position = remaining.iter().position(|(_, option)| {
            option
                .default()
                .inputs()
                .iter()
                .all(|input| resolved.contains(input))
        });
        let Some(next) = position else {
            let cycle = remaining
                .iter()
                .map(|(_, option)| option.name())
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(OptionsError::CycleInDerivation { cycle });
        };
        let (slot, option) = remaining.remove(next);
        resolved.insert(option.name());
        order.push(slot);
    }
    Ok(order)
}

/// Immutable catalogue of every recognised option.
///
/// Holds the descriptors in registration order (which is also the
/// validation order) together with the derivation order computed when the
/// catalogue was sealed.
#[derive(Debug)]
pub struct OptionRegistry {
    options: Vec<OptionDescriptor>,
    index: HashMap<&'static str, usize>,
    derivation_order: Vec<usize>,
}

impl OptionRegistry {
    /// The process-wide standard catalogue of generator options.
    ///
    /// Built on first use and shared for the remainder of the process
    /// lifetime.
    ///
    /// # Panics
    ///
    /// Panics on first access if the built-in catalogue is inconsistent;
    /// this is a developer error equivalent to a failed assertion at
    /// process start.
    #[must_use]
    pub fn standard() -> &'static Self {
        static STANDARD: LazyLock<OptionRegistry> = LazyLock::new(|| {
            #[expect(
                clippy::expect_used,
                reason = "catalogue defects are developer errors surfaced at first use"
            )]
            let registry = catalog::standard_catalog()
                .expect("standard option catalogue is internally consistent");
            registry
        });
        &STANDARD
    }

    /// Descriptor registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::UnknownOption`] when no such option exists.
    pub fn describe(&self, name: &str) -> Result<&OptionDescriptor, OptionsError> {
        self.index
            .get(name)
            .and_then(|slot| self.options.get(*slot))
            .ok_or_else(|| OptionsError::UnknownOption {
                name: name.to_owned(),
            })
    }

    /// Whether `name` is a registered option.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.options.iter()
    }

    /// Number of registered options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate descriptors in derivation order (inputs before dependents).
    pub(crate) fn derivation_order(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.derivation_order
            .iter()
            .filter_map(|slot| self.options.get(*slot))
    }

    /// Registry with a hand-picked derivation order, bypassing the checks
    /// in [`RegistryBuilder::finish`].
    #[cfg(test)]
    pub(crate) fn with_derivation_order_for_tests(
        options: Vec<OptionDescriptor>,
        derivation_order: Vec<usize>,
    ) -> Self {
        let index = options
            .iter()
            .enumerate()
            .map(|(slot, option)| (option.name(), slot))
            .collect();
        Self {
            options,
            index,
            derivation_order,
        }
    }
}
