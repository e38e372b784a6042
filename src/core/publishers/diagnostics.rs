use crate::core::types::ErrorSeverity;
use serde::Serialize;
use std::fmt;

/// Unrecognised xUnit framework type.
pub const UNKNOWN_XUNIT_TYPE: &str = "PUB-WARN-001";
/// xUnit threshold entry keyed by something other than `failed`/`skipped`.
pub const UNKNOWN_THRESHOLD_CATEGORY: &str = "PUB-WARN-002";
/// Violations config for a system outside the known list.
pub const UNKNOWN_VIOLATION_SYSTEM: &str = "PUB-WARN-003";

/// Non-fatal finding raised while compiling an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub code: &'static str,
    #[serde(skip)]
    pub severity: ErrorSeverity,
    pub action: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.action, self.message)
    }
}

/// Warnings collected during one compilation. Never blocks completion.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and log it.
    pub fn warn(&mut self, action: &str, code: &'static str, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(action, code, "{}", message);
        self.entries.push(Diagnostic {
            code,
            severity: ErrorSeverity::Warning,
            action: action.to_string(),
            message,
        });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.entries.iter().filter(move |entry| entry.code == code)
    }
}
