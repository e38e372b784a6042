use crate::core::error::AppError;
use crate::core::publishers::params::{resolve, ActionConfig};
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct DeployConfig {
    pub artifacts: String,
    pub remote: String,
}

impl ActionConfig for DeployConfig {
    const REQUIRED: &'static [&'static str] = &["artifacts", "remote"];
}

/// Deploy build artifacts to a remote directory.
pub struct DeployPublisher;

impl Publisher for DeployPublisher {
    fn name(&self) -> &'static str {
        "deploy"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let config: DeployConfig = resolve(self.name(), config)?;
        let entry = parent
            .sub("org.jenkinsci.plugins.artifactdeployer.ArtifactDeployerPublisher")
            .sub("entries")
            .sub("org.jenkinsci.plugins.artifactdeployer.ArtifactDeployerEntry");
        entry.sub_text("includes", config.artifacts);
        entry.sub_text("remote", config.remote);
        Ok(())
    }
}
