use crate::core::error::AppError;
use crate::core::publishers::coerce::{bool_text, join_list};
use crate::core::publishers::params::{resolve, ActionConfig};
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct CopyToMasterConfig {
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
    /// Blank copies into the job workspace.
    #[serde(default)]
    pub destination: String,
}

impl ActionConfig for CopyToMasterConfig {}

/// Copy files from the agent back to the master.
pub struct CopyToMasterPublisher;

impl Publisher for CopyToMasterPublisher {
    fn name(&self) -> &'static str {
        "copy-to-master"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let config: CopyToMasterConfig = resolve(self.name(), config)?;
        let notifier = parent.sub("com.michelin.cio.hudson.plugins.copytoslave.CopyToMasterNotifier");
        notifier.sub_text("includes", join_list(&config.includes));
        notifier.sub_text("excludes", join_list(&config.excludes));
        notifier.sub_text("destinationFolder", config.destination.as_str());
        if !config.destination.is_empty() {
            notifier.sub_text("overrideDestinationFolder", bool_text(true));
        }
        Ok(())
    }
}
