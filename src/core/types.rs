use serde::{Deserialize, Serialize};

/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// No handler is registered under the requested action name.
    UnknownAction,
    /// A mandatory config key is absent.
    MissingField,
    /// A constrained field holds a value outside its fixed set.
    InvalidValue,
    /// A config value has the wrong type for its field.
    InvalidShape,
    ValidationError,
    SerializationError,
    IoError,
    InternalError,
}

impl ErrorCategory {
    /// Stable short code used when an error carries no explicit code.
    pub fn default_code(&self) -> &'static str {
        match self {
            ErrorCategory::UnknownAction => "PUB-ACTION-001",
            ErrorCategory::MissingField => "PUB-FIELD-001",
            ErrorCategory::InvalidValue => "PUB-FIELD-002",
            ErrorCategory::InvalidShape => "PUB-FIELD-003",
            ErrorCategory::ValidationError => "PUB-CONFIG-001",
            ErrorCategory::SerializationError => "PUB-XML-001",
            ErrorCategory::IoError => "PUB-IO-001",
            ErrorCategory::InternalError => "PUB-INTERNAL-001",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Error severity enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Error,
    Warning,
}
