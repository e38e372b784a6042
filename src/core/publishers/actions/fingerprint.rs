use crate::core::error::AppError;
use crate::core::publishers::coerce::Flag;
use crate::core::publishers::params::{resolve, ActionConfig};
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FingerprintConfig {
    #[serde(default)]
    pub files: String,
    #[serde(default)]
    pub record_artifacts: Flag,
}

impl ActionConfig for FingerprintConfig {}

/// Fingerprint files to track them across builds.
pub struct FingerprintPublisher;

impl Publisher for FingerprintPublisher {
    fn name(&self) -> &'static str {
        "fingerprint"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let config: FingerprintConfig = resolve(self.name(), config)?;
        let fingerprinter = parent.sub("hudson.tasks.Fingerprinter");
        fingerprinter.sub_text("targets", config.files);
        fingerprinter.sub_text("recordBuildArtifacts", config.record_artifacts.text());
        Ok(())
    }
}
