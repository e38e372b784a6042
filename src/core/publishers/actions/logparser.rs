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
pub struct LogParserConfig {
    #[serde(default)]
    pub parse_rules: String,
    #[serde(default)]
    pub unstable_on_warning: Flag,
    #[serde(default)]
    pub fail_on_error: Flag,
}

impl ActionConfig for LogParserConfig {}

/// Parse the console log against a rules file.
pub struct LogParserPublisher;

impl Publisher for LogParserPublisher {
    fn name(&self) -> &'static str {
        "logparser"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let config: LogParserConfig = resolve(self.name(), config)?;
        let publisher = parent.sub("hudson.plugins.logparser.LogParserPublisher");
        publisher.sub_text("unstableOnWarning", config.unstable_on_warning.text());
        publisher.sub_text("failBuildOnError", config.fail_on_error.text());
        publisher.sub_text("parsingRulesPath", config.parse_rules);
        Ok(())
    }
}
