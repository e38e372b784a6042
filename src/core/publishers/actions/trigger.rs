use crate::core::error::AppError;
use crate::core::publishers::params::{resolve, ActionConfig};
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde::Deserialize;
use serde_json::Value;

/// Result threshold name, ordinal and ball colour.
pub const TRIGGER_THRESHOLDS: &[(&str, &str, &str)] = &[
    ("SUCCESS", "0", "BLUE"),
    ("UNSTABLE", "1", "YELLOW"),
    ("FAILURE", "2", "RED"),
];

fn default_threshold() -> String {
    "SUCCESS".to_string()
}

#[derive(Debug, Deserialize)]
pub struct TriggerConfig {
    pub project: String,
    #[serde(default = "default_threshold")]
    pub threshold: String,
}

impl ActionConfig for TriggerConfig {
    const REQUIRED: &'static [&'static str] = &["project"];
}

/// Trigger non-parameterized builds of other jobs.
pub struct TriggerPublisher;

impl Publisher for TriggerPublisher {
    fn name(&self) -> &'static str {
        "trigger"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let config: TriggerConfig = resolve(self.name(), config)?;
        let (name, ordinal, color) = TRIGGER_THRESHOLDS
            .iter()
            .find(|(name, _, _)| *name == config.threshold)
            .copied()
            .ok_or_else(|| {
                let valid: Vec<&str> = TRIGGER_THRESHOLDS.iter().map(|(name, _, _)| *name).collect();
                AppError::invalid_value(self.name(), "threshold", &config.threshold, &valid)
            })?;

        let trigger = parent.sub("hudson.tasks.BuildTrigger");
        trigger.sub_text("childProjects", config.project);
        let threshold = trigger.sub("threshold");
        threshold.sub_text("name", name);
        threshold.sub_text("ordinal", ordinal);
        threshold.sub_text("color", color);
        Ok(())
    }
}
