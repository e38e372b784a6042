use crate::core::error::AppError;
use crate::core::publishers::builders::{build_thresholds, build_types, threshold_mode};
use crate::core::publishers::params::{resolve, ActionConfig};
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde::Deserialize;
use serde_json::Value;

fn default_mode() -> String {
    "number".to_string()
}

#[derive(Debug, Deserialize)]
pub struct XunitConfig {
    pub types: Vec<Value>,
    #[serde(default)]
    pub thresholds: Vec<Value>,
    #[serde(default = "default_mode")]
    pub thresholdmode: String,
}

impl ActionConfig for XunitConfig {
    const REQUIRED: &'static [&'static str] = &["types"];
}

/// Publish test results through the xUnit plugin.
pub struct XunitPublisher;

impl Publisher for XunitPublisher {
    fn name(&self) -> &'static str {
        "xunit"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let config: XunitConfig = resolve(self.name(), config)?;
        let mode = threshold_mode(self.name(), &config.thresholdmode)?;

        let xunit = parent.sub("xunit");
        build_types(xunit, self.name(), &config.types, diagnostics)?;
        build_thresholds(xunit, self.name(), &config.thresholds, diagnostics)?;
        xunit.sub_text("thresholdMode", mode);
        Ok(())
    }
}
