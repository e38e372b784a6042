#![allow(clippy::result_large_err)]

use crate::core::error::AppError;
use crate::core::publishers::params::kind;
use crate::core::publishers::{compile_publishers, Action, Diagnostics, PublisherRegistry};
use crate::core::types::ErrorCategory;
use crate::core::xml::XmlElement;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One job read from a job document: its name and ordered publisher actions.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDefinition {
    pub name: String,
    pub publishers: Vec<Action>,
}

impl JobDefinition {
    /// Compile into `<project><publishers>…</publishers></project>`.
    pub fn compile(
        &self,
        registry: &PublisherRegistry,
        diagnostics: &mut Diagnostics,
    ) -> Result<XmlElement, AppError> {
        debug!(job = %self.name, actions = self.publishers.len(), "compiling job");
        let publishers = compile_publishers(registry, &self.publishers, diagnostics)
            .map_err(|err| err.with_entry("job", self.name.as_str()))?;
        let mut project = XmlElement::new("project");
        project.push(publishers);
        Ok(project)
    }

    fn from_value(value: &Value, position: usize) -> Result<Self, AppError> {
        let Value::Object(job) = value else {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                format!("job #{} must be a mapping, got {}", position, kind(value)),
            ));
        };
        let name = match job.get("name") {
            Some(Value::String(name)) if !name.is_empty() => name.clone(),
            Some(Value::Number(number)) => number.to_string(),
            _ => {
                return Err(AppError::new(
                    ErrorCategory::ValidationError,
                    format!("job #{} has no name", position),
                ))
            }
        };
        let publishers = Action::list_from_value(job.get("publishers").unwrap_or(&Value::Null))
            .map_err(|err| err.with_entry("job", name.as_str()))?;
        Ok(Self { name, publishers })
    }
}

/// Parse a job document: a list of `job:` items or a single `job:` mapping.
pub fn parse_jobs(text: &str) -> Result<Vec<JobDefinition>, AppError> {
    let document: Value = serde_yaml::from_str(text).map_err(|err| {
        AppError::new(
            ErrorCategory::ValidationError,
            format!("failed to parse job document: {}", err),
        )
    })?;

    let items = match document {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        single @ Value::Object(_) => vec![single],
        other => {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                format!("a job document must be a list or a mapping, got {}", kind(&other)),
            ))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(position, item)| match item.get("job") {
            Some(job) if item.as_object().is_some_and(|map| map.len() == 1) => {
                JobDefinition::from_value(job, position)
            }
            _ => Err(AppError::new(
                ErrorCategory::ValidationError,
                format!("item #{} is not a `job:` definition", position),
            )),
        })
        .collect()
}

pub fn load_jobs(path: &Path) -> Result<Vec<JobDefinition>, AppError> {
    let text = fs::read_to_string(path).map_err(|err| {
        AppError::new(
            ErrorCategory::IoError,
            format!("failed to read {}: {}", path.display(), err),
        )
    })?;
    parse_jobs(&text).map_err(|err| err.with_entry("file", path.display().to_string()))
}
