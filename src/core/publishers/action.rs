#![allow(clippy::result_large_err)]

use crate::core::error::AppError;
use crate::core::publishers::params::kind;
use crate::core::types::ErrorCategory;
use serde_json::Value;

/// One named, user-configured post-build step.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub name: String,
    pub config: Value,
}

impl Action {
    pub fn new<T: Into<String>>(name: T, config: Value) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    /// Flag-only action with no configuration.
    pub fn flag<T: Into<String>>(name: T) -> Self {
        Self::new(name, Value::Null)
    }

    /// Parse one list item: either a bare action name or a single-key
    /// mapping of name to config.
    pub fn from_value(value: &Value) -> Result<Self, AppError> {
        match value {
            Value::String(name) => Ok(Self::flag(name.clone())),
            Value::Object(map) if map.len() == 1 => {
                let (name, config) = map
                    .iter()
                    .next()
                    .ok_or_else(|| AppError::new(ErrorCategory::InternalError, "empty action map"))?;
                Ok(Self::new(name.clone(), config.clone()))
            }
            Value::Object(map) => Err(AppError::new(
                ErrorCategory::InvalidShape,
                format!(
                    "an action entry must have exactly one key, found {}: {}",
                    map.len(),
                    map.keys().cloned().collect::<Vec<_>>().join(", ")
                ),
            )),
            other => Err(AppError::new(
                ErrorCategory::InvalidShape,
                format!(
                    "an action entry must be a name or a single-key mapping, got {}",
                    kind(other)
                ),
            )),
        }
    }

    /// Parse an ordered action list.
    pub fn list_from_value(value: &Value) -> Result<Vec<Self>, AppError> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    Self::from_value(item).map_err(|err| err.with_entry("index", index.to_string()))
                })
                .collect(),
            other => Err(AppError::new(
                ErrorCategory::InvalidShape,
                format!("publishers must be a list, got {}", kind(other)),
            )),
        }
    }
}
