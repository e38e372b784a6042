//! Conversions from config values to the literal strings plugin schemas expect.

use serde::Deserialize;
use serde_json::{Number, Value};
use std::fmt;

/// Lowercase boolean literal used by every plugin schema.
pub fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Loose truthiness used for "set and non-empty" checks: `false`, `0`, `""`,
/// `null` and empty collections are all unset.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Render a scalar config value as element text. Collections render as JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => bool_text(*flag).to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Comma-joined list text.
pub fn join_list(items: &[String]) -> String {
    items.join(",")
}

/// Boolean option that also accepts `"true"`/`"false"` strings (any case)
/// and integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawFlag")]
pub struct Flag(pub bool);

impl Flag {
    pub fn on() -> Self {
        Flag(true)
    }

    pub fn off() -> Self {
        Flag(false)
    }

    pub fn get(self) -> bool {
        self.0
    }

    pub fn text(self) -> &'static str {
        bool_text(self.0)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl TryFrom<RawFlag> for Flag {
    type Error = String;

    fn try_from(raw: RawFlag) -> Result<Self, Self::Error> {
        match raw {
            RawFlag::Bool(flag) => Ok(Flag(flag)),
            RawFlag::Int(number) => Ok(Flag(number != 0)),
            RawFlag::Text(text) => match text.trim().to_lowercase().as_str() {
                "true" => Ok(Flag(true)),
                "false" => Ok(Flag(false)),
                _ => Err(format!("expected a boolean, got '{}'", text)),
            },
        }
    }
}

/// Scalar option rendered verbatim as element text (numbers are stringified).
///
/// Remembers whether the original value was truthy so handlers that emit an
/// empty element for `0`/`""` can keep doing so.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "RawScalar")]
pub struct Scalar {
    text: String,
    truthy: bool,
}

impl Scalar {
    pub fn new<T: Into<String>>(text: T) -> Self {
        let text = text.into();
        let truthy = !text.is_empty();
        Self { text, truthy }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_truthy(&self) -> bool {
        self.truthy
    }

    /// The text when truthy, otherwise `None`.
    pub fn truthy_text(&self) -> Option<&str> {
        self.truthy.then_some(self.text.as_str())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Bool(bool),
    Number(Number),
    Text(String),
}

impl TryFrom<RawScalar> for Scalar {
    type Error = String;

    fn try_from(raw: RawScalar) -> Result<Self, Self::Error> {
        Ok(match raw {
            RawScalar::Bool(flag) => Scalar {
                text: bool_text(flag).to_string(),
                truthy: flag,
            },
            // Display keeps `5.0` as written and u64 values past i64::MAX exact.
            RawScalar::Number(number) => Scalar {
                truthy: number.as_f64().is_some_and(|n| n != 0.0),
                text: number.to_string(),
            },
            RawScalar::Text(text) => Scalar::new(text),
        })
    }
}
