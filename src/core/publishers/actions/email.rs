use crate::core::error::AppError;
use crate::core::publishers::coerce::{bool_text, Flag};
use crate::core::publishers::params::{resolve, ActionConfig};
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EmailConfig {
    pub recipients: String,
    #[serde(default = "Flag::on")]
    pub notify_every_unstable_build: Flag,
    #[serde(default)]
    pub send_to_individuals: Flag,
}

impl ActionConfig for EmailConfig {
    const REQUIRED: &'static [&'static str] = &["recipients"];
}

/// Mail notification on build failure.
pub struct EmailPublisher;

impl Publisher for EmailPublisher {
    fn name(&self) -> &'static str {
        "email"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let config: EmailConfig = resolve(self.name(), config)?;
        let mailer = parent.sub("hudson.tasks.Mailer");
        mailer.sub_text("recipients", config.recipients);
        // The schema stores the negation of the user-facing option.
        mailer.sub_text(
            "dontNotifyEveryUnstableBuild",
            bool_text(!config.notify_every_unstable_build.get()),
        );
        mailer.sub_text("sendToIndividuals", config.send_to_individuals.text());
        Ok(())
    }
}
