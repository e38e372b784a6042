use crate::core::types::{ErrorCategory, ErrorSeverity};
use crate::core::xml::XmlWriteError;
use std::collections::BTreeMap;

/// Fatal configuration or compilation error.
///
/// Every variant of [`ErrorCategory`] aborts compilation of the whole
/// document; non-fatal findings travel through
/// [`Diagnostics`](crate::core::publishers::Diagnostics) instead.
#[derive(Debug)]
pub struct AppError {
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
    pub code: String,
    pub message: String,
    pub context: BTreeMap<String, String>,
    pub source: Option<anyhow::Error>,
}

impl AppError {
    pub fn new<T: Into<String>>(category: ErrorCategory, message: T) -> Self {
        AppError {
            category,
            severity: ErrorSeverity::Error,
            code: category.default_code().to_string(),
            message: message.into(),
            context: BTreeMap::new(),
            source: None,
        }
    }

    pub fn with_source<T: Into<String>>(
        category: ErrorCategory,
        message: T,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        let mut error = AppError::new(category, message);
        error.source = Some(anyhow::anyhow!(source));
        error
    }

    /// No handler registered for `action` within `namespace`.
    pub fn unknown_action(action: &str, namespace: &str) -> Self {
        AppError::new(
            ErrorCategory::UnknownAction,
            format!(
                "no handler registered for action '{}' in namespace '{}'",
                action, namespace
            ),
        )
        .with_entry("action", action)
        .with_entry("namespace", namespace)
    }

    pub fn missing_field(action: &str, field: &str) -> Self {
        AppError::new(
            ErrorCategory::MissingField,
            format!("{}: missing required field '{}'", action, field),
        )
        .with_entry("action", action)
        .with_entry("field", field)
    }

    /// A constrained field holds `value`; the message lists every accepted value.
    pub fn invalid_value(action: &str, field: &str, value: &str, valid: &[&str]) -> Self {
        AppError::new(
            ErrorCategory::InvalidValue,
            format!(
                "{}: '{}' is not a valid {}, must be one of: {}",
                action,
                value,
                field,
                valid.join(", ")
            ),
        )
        .with_entry("action", action)
        .with_entry("field", field)
    }

    pub fn invalid_shape<T: Into<String>>(action: &str, message: T) -> Self {
        AppError::new(
            ErrorCategory::InvalidShape,
            format!("{}: {}", action, message.into()),
        )
        .with_entry("action", action)
    }

    pub fn with_entry<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    pub fn with_code<T: Into<String>>(mut self, code: T) -> Self {
        self.code = code.into();
        self
    }

    pub fn severity(&self) -> ErrorSeverity {
        self.severity
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.category, self.message)?;
        if let Some(ref source) = self.source {
            write!(f, "\nCaused by: {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError {
            category: ErrorCategory::InternalError,
            severity: ErrorSeverity::Error,
            code: "ANYHOW_ERROR".to_string(),
            message: e.to_string(),
            context: BTreeMap::new(),
            source: Some(e),
        }
    }
}

impl From<XmlWriteError> for AppError {
    fn from(e: XmlWriteError) -> Self {
        AppError::with_source(ErrorCategory::SerializationError, "failed to render xml", Box::new(e))
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError {
            category: ErrorCategory::IoError,
            severity: ErrorSeverity::Error,
            code: ErrorCategory::IoError.default_code().to_string(),
            message: e.to_string(),
            context: BTreeMap::new(),
            source: Some(anyhow::anyhow!(e)),
        }
    }
}
