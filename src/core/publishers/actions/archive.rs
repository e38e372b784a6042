use crate::core::error::AppError;
use crate::core::publishers::coerce::Flag;
use crate::core::publishers::params::{resolve, ActionConfig};
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ArchiveConfig {
    pub artifacts: String,
    /// Emitted only when present.
    #[serde(default)]
    pub excludes: Option<String>,
    #[serde(default, alias = "latest-only")]
    pub latest_only: Flag,
}

impl ActionConfig for ArchiveConfig {
    const REQUIRED: &'static [&'static str] = &["artifacts"];
}

/// Archive build artifacts.
pub struct ArchivePublisher;

impl Publisher for ArchivePublisher {
    fn name(&self) -> &'static str {
        "archive"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let config: ArchiveConfig = resolve(self.name(), config)?;
        let archiver = parent.sub("hudson.tasks.ArtifactArchiver");
        archiver.sub_text("artifacts", config.artifacts);
        if let Some(excludes) = config.excludes {
            archiver.sub_text("excludes", excludes);
        }
        archiver.sub_text("latestOnly", config.latest_only.text());
        Ok(())
    }
}
