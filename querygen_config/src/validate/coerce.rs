//! Kind checking and coercion of raw values into typed option values.

use camino::Utf8PathBuf;
use regex::Regex;

use crate::error::OptionsError;
use crate::options::{PatternSet, ScalarMapping};
use crate::raw::RawValue;
use crate::registry::{OptionDescriptor, OptionKind, OptionValue};

/// Check `value` against the descriptor's kind and produce its typed form.
///
/// List kinds report one error per offending entry rather than stopping at
/// the first, so a single malformed pattern or mapping does not mask its
/// siblings.
pub(crate) fn coerce(
    descriptor: &OptionDescriptor,
    value: &RawValue,
) -> Result<OptionValue, Vec<OptionsError>> {
    match descriptor.kind() {
        OptionKind::Bool => match value {
            RawValue::Bool(flag) => Ok(OptionValue::Bool(*flag)),
            other => Err(mismatch(descriptor, "a boolean", other)),
        },
        OptionKind::Enum => match value {
            RawValue::Text(token) => coerce_token(descriptor, token),
            other => Err(mismatch(descriptor, "an enumeration token", other)),
        },
        OptionKind::Text => match value {
            RawValue::Text(text) => Ok(OptionValue::Text(text.clone())),
            other => Err(mismatch(descriptor, "a string", other)),
        },
        OptionKind::TextList => match value {
            RawValue::List(items) => Ok(OptionValue::TextList(items.clone())),
            other => Err(mismatch(descriptor, "a list of strings", other)),
        },
        OptionKind::ScalarList => match value {
            RawValue::List(entries) => coerce_scalar_entries(descriptor, entries),
            other => Err(mismatch(descriptor, "a list of scalar mappings", other)),
        },
        OptionKind::PatternList => match value {
            RawValue::List(sources) => coerce_patterns(descriptor, sources),
            other => Err(mismatch(descriptor, "a list of patterns", other)),
        },
        OptionKind::Path => match value {
            RawValue::Path(path) => Ok(OptionValue::Path(path.clone())),
            RawValue::Text(text) => Ok(OptionValue::Path(Utf8PathBuf::from(text))),
            other => Err(mismatch(descriptor, "a path", other)),
        },
        OptionKind::PathList => match value {
            RawValue::Paths(paths) => Ok(OptionValue::Paths(paths.clone())),
            RawValue::List(items) => Ok(OptionValue::Paths(
                items.iter().map(Utf8PathBuf::from).collect(),
            )),
            other => Err(mismatch(descriptor, "a list of paths", other)),
        },
    }
}

fn coerce_token(
    descriptor: &OptionDescriptor,
    token: &str,
) -> Result<OptionValue, Vec<OptionsError>> {
    if descriptor.enum_tokens().contains(&token) {
        Ok(OptionValue::token(token))
    } else {
        Err(vec![OptionsError::InvalidValue {
            option: descriptor.name().to_owned(),
            message: format!(
                "unrecognised token '{token}', expected one of: {}",
                descriptor.enum_tokens().join(", ")
            ),
        }])
    }
}

fn coerce_scalar_entries(
    descriptor: &OptionDescriptor,
    entries: &[String],
) -> Result<OptionValue, Vec<OptionsError>> {
    let mut mappings = Vec::with_capacity(entries.len());
    let mut errors = Vec::new();
    for entry in entries {
        match entry.parse::<ScalarMapping>() {
            Ok(mapping) => mappings.push(mapping),
            Err(err) => errors.push(OptionsError::InvalidValue {
                option: descriptor.name().to_owned(),
                message: err.to_string(),
            }),
        }
    }
    if errors.is_empty() {
        Ok(OptionValue::Scalars(mappings))
    } else {
        Err(errors)
    }
}

fn coerce_patterns(
    descriptor: &OptionDescriptor,
    sources: &[String],
) -> Result<OptionValue, Vec<OptionsError>> {
    let mut errors = Vec::new();
    for source in sources {
        if let Err(err) = Regex::new(source) {
            errors.push(OptionsError::PatternCompile {
                option: descriptor.name().to_owned(),
                pattern: source.clone(),
                source: Box::new(err),
            });
        }
    }
    if errors.is_empty() {
        Ok(OptionValue::Patterns(PatternSet::new(sources.to_vec())))
    } else {
        Err(errors)
    }
}

fn mismatch(
    descriptor: &OptionDescriptor,
    expected: &str,
    supplied: &RawValue,
) -> Vec<OptionsError> {
    vec![OptionsError::InvalidValue {
        option: descriptor.name().to_owned(),
        message: format!("expected {expected}, got {}", describe(supplied)),
    }]
}

fn describe(value: &RawValue) -> &'static str {
    match value {
        RawValue::Bool(_) => "a boolean",
        RawValue::Text(_) => "a string",
        RawValue::List(_) => "a list of strings",
        RawValue::Path(_) => "a path",
        RawValue::Paths(_) => "a list of paths",
    }
}
