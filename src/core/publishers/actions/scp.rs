use crate::core::error::AppError;
use crate::core::publishers::coerce::Flag;
use crate::core::publishers::params::{expect_list, resolve, resolve_entries, ActionConfig};
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ScpConfig {
    pub site: String,
    pub files: Value,
}

impl ActionConfig for ScpConfig {
    const REQUIRED: &'static [&'static str] = &["site", "files"];
}

/// One file set copied to the site.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScpEntry {
    /// Required unless `copy-console` is set.
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub keep_hierarchy: Flag,
    #[serde(default)]
    pub copy_console: Flag,
    #[serde(default)]
    pub copy_after_failure: Flag,
}

impl ActionConfig for ScpEntry {}

/// Upload files over SCP. The plugin does not follow the publish-over
/// schema, so this builds its own layout.
pub struct ScpPublisher;

impl Publisher for ScpPublisher {
    fn name(&self) -> &'static str {
        "scp"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let config: ScpConfig = resolve(self.name(), config)?;
        let entries: Vec<ScpEntry> =
            resolve_entries(self.name(), expect_list(self.name(), &config.files)?)?;

        let mut targets = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let target = match (&entry.target, entry.copy_console.get()) {
                (Some(target), _) => target.clone(),
                (None, true) => String::new(),
                (None, false) => {
                    return Err(AppError::missing_field(self.name(), "target")
                        .with_entry("entry", index.to_string()))
                }
            };
            targets.push(target);
        }

        let scp = parent.sub("be.certipost.hudson.plugin.SCPRepositoryPublisher");
        scp.sub_text("siteName", config.site);
        let list = scp.sub("entries");
        for (entry, target) in entries.into_iter().zip(targets) {
            let element = list.sub("be.certipost.hudson.plugin.Entry");
            element.sub_text("filePath", target);
            element.sub_text("sourceFile", entry.source);
            element.sub_text("keepHierarchy", entry.keep_hierarchy.text());
            element.sub_text("copyConsoleLog", entry.copy_console.text());
            element.sub_text("copyAfterFailure", entry.copy_after_failure.text());
        }
        Ok(())
    }
}
