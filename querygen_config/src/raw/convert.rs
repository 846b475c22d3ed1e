//! JSON ingestion for raw configurations.

use serde_json::Value;

use crate::error::OptionsError;

use super::{RawOptions, RawValue};

impl RawOptions {
    /// Build a raw configuration from a JSON object.
    ///
    /// Build-tool integrations and test fixtures can compose deterministic
    /// inputs as JSON literals: booleans, strings, and arrays of strings
    /// map onto [`RawValue`] directly. Paths travel as plain strings and
    /// are typed by the validator against the descriptor's kind.
    ///
    /// This is transport-shape checking only, so it fails on the first
    /// unrepresentable value; option-level problems are left to
    /// [`crate::OptionRegistry::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidValue`] when the root is not an
    /// object or an entry is not a boolean, string, or array of strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use querygen_config::{RawOptions, names};
    /// use serde_json::json;
    ///
    /// let raw = RawOptions::from_json(json!({
    ///     "generateMetadata": true,
    ///     "sealedEnumsMatching": [".*Kind$"],
    /// }))?;
    /// assert!(raw.contains(names::GENERATE_METADATA));
    /// # Ok::<_, querygen_config::OptionsError>(())
    /// ```
    pub fn from_json(value: Value) -> Result<Self, OptionsError> {
        let Value::Object(entries) = value else {
            return Err(OptionsError::InvalidValue {
                option: String::from("$"),
                message: String::from("raw configuration must be a JSON object"),
            });
        };
        let mut raw = Self::default();
        for (name, entry) in entries {
            let converted = convert_entry(&name, entry)?;
            raw.values.insert(name, converted);
        }
        Ok(raw)
    }
}

fn convert_entry(name: &str, entry: Value) -> Result<RawValue, OptionsError> {
    match entry {
        Value::Bool(flag) => Ok(RawValue::Bool(flag)),
        Value::String(text) => Ok(RawValue::Text(text)),
        Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                let Value::String(text) = item else {
                    return Err(OptionsError::InvalidValue {
                        option: name.to_owned(),
                        message: String::from("list entries must be strings"),
                    });
                };
                list.push(text);
            }
            Ok(RawValue::List(list))
        }
        Value::Null | Value::Number(_) | Value::Object(_) => Err(OptionsError::InvalidValue {
            option: name.to_owned(),
            message: String::from("expected a boolean, a string, or an array of strings"),
        }),
    }
}
