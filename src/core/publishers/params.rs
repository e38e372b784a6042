//! Resolution of raw action configs into typed, defaulted option structs.
//!
//! Each handler declares a config struct whose serde defaults form its
//! default table and whose `REQUIRED` list names the keys that must be
//! present. Resolution happens once, before any element is built.

use crate::core::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Typed options for one action (or one nested entry of an action).
pub trait ActionConfig: DeserializeOwned {
    /// Keys that must be present and non-null.
    const REQUIRED: &'static [&'static str] = &[];
}

/// Resolve a mapping config; `null` is treated as an empty mapping.
///
/// An optional key given as `null` (`fail-on-error:` with no value) takes
/// its declared default, the same as an absent key.
pub fn resolve<C: ActionConfig>(action: &str, config: &Value) -> Result<C, AppError> {
    let mut map = match config {
        Value::Null => Map::new(),
        Value::Object(map) => map.clone(),
        other => {
            return Err(AppError::invalid_shape(
                action,
                format!("expected a mapping of options, got {}", kind(other)),
            ))
        }
    };

    for field in C::REQUIRED {
        if map.get(*field).map_or(true, Value::is_null) {
            return Err(AppError::missing_field(action, field));
        }
    }
    map.retain(|_, value| !value.is_null());

    serde_json::from_value(Value::Object(map))
        .map_err(|err| AppError::invalid_shape(action, err.to_string()))
}

/// Resolve every entry of a list-of-mappings config, preserving order.
pub fn resolve_entries<C: ActionConfig>(action: &str, entries: &[Value]) -> Result<Vec<C>, AppError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            resolve(action, entry).map_err(|err| err.with_entry("entry", index.to_string()))
        })
        .collect()
}

/// A config that must be a list, e.g. repeated project definitions.
pub fn expect_list<'a>(action: &str, config: &'a Value) -> Result<&'a [Value], AppError> {
    match config {
        Value::Array(items) => Ok(items),
        other => Err(AppError::invalid_shape(
            action,
            format!("expected a list, got {}", kind(other)),
        )),
    }
}

/// A single-parameter action taking a scalar (project name, script body).
pub fn expect_text(action: &str, config: &Value) -> Result<String, AppError> {
    match config {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(AppError::invalid_shape(
            action,
            format!("expected a string, got {}", kind(other)),
        )),
    }
}

/// Short description of a value's type for error messages.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
