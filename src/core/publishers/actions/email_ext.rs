use crate::core::error::AppError;
use crate::core::publishers::coerce::{bool_text, Flag};
use crate::core::publishers::params::{resolve, ActionConfig};
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde::Deserialize;
use serde_json::{Map, Value};

const TRIGGER_PACKAGE: &str = "hudson.plugins.emailext.plugins.trigger";

/// Option key, trigger class and default, in schema order.
pub const EMAIL_EXT_TRIGGERS: &[(&str, &str, bool)] = &[
    ("unstable", "UnstableTrigger", false),
    ("first-failure", "FirstFailureTrigger", false),
    ("not-built", "NotBuiltTrigger", false),
    ("aborted", "AbortedTrigger", false),
    ("regression", "RegressionTrigger", false),
    ("failure", "FailureTrigger", true),
    ("improvement", "ImprovementTrigger", false),
    ("still-failing", "StillFailingTrigger", false),
    ("success", "SuccessTrigger", false),
    ("fixed", "FixedTrigger", false),
    ("still-unstable", "StillUnstableTrigger", false),
    ("pre-build", "PreBuildTrigger", false),
];

pub const MATRIX_TRIGGER_MODES: &[&str] = &["BOTH", "ONLY_PARENT", "ONLY_CONFIGURATION"];

fn default_recipients() -> String {
    "$DEFAULT_RECIPIENTS".to_string()
}

fn default_subject() -> String {
    "$DEFAULT_SUBJECT".to_string()
}

fn default_body() -> String {
    "$DEFAULT_CONTENT".to_string()
}

fn default_matrix_mode() -> String {
    "BOTH".to_string()
}

#[derive(Debug, Deserialize)]
pub struct EmailExtConfig {
    #[serde(default = "default_recipients")]
    pub recipients: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_body")]
    pub body: String,
    #[serde(default = "default_matrix_mode", rename = "matrixTriggerMode")]
    pub matrix_trigger_mode: String,
    /// Trigger switches, looked up through [`EMAIL_EXT_TRIGGERS`].
    #[serde(flatten)]
    pub triggers: Map<String, Value>,
}

impl EmailExtConfig {
    fn trigger_enabled(&self, action: &str, key: &str, default: bool) -> Result<bool, AppError> {
        match self.triggers.get(key) {
            None | Some(Value::Null) => Ok(default),
            Some(value) => serde_json::from_value::<Flag>(value.clone())
                .map(Flag::get)
                .map_err(|err| AppError::invalid_shape(action, format!("{}: {}", key, err))),
        }
    }
}

impl ActionConfig for EmailExtConfig {}

/// Extended email notifications.
pub struct EmailExtPublisher;

impl Publisher for EmailExtPublisher {
    fn name(&self) -> &'static str {
        "email-ext"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let config: EmailExtConfig = resolve(self.name(), config)?;
        if !MATRIX_TRIGGER_MODES.contains(&config.matrix_trigger_mode.as_str()) {
            return Err(AppError::invalid_value(
                self.name(),
                "matrixTriggerMode",
                &config.matrix_trigger_mode,
                MATRIX_TRIGGER_MODES,
            ));
        }
        let mut enabled = Vec::new();
        for (key, class, default) in EMAIL_EXT_TRIGGERS {
            if config.trigger_enabled(self.name(), key, *default)? {
                enabled.push(*class);
            }
        }

        let publisher = parent.sub("hudson.plugins.emailext.ExtendedEmailPublisher");
        publisher.sub_text("recipientList", config.recipients.as_str());
        let triggers = publisher.sub("configuredTriggers");
        for class in enabled {
            add_trigger(triggers, class);
        }
        publisher.sub_text("contentType", "default");
        publisher.sub_text("defaultSubject", config.subject.as_str());
        publisher.sub_text("defaultContent", config.body.as_str());
        publisher.sub_text("attachmentsPattern", "");
        publisher.sub_text("presendScript", "");
        publisher.sub_text("matrixTriggerMode", config.matrix_trigger_mode.as_str());
        Ok(())
    }
}

fn add_trigger(triggers: &mut XmlElement, class: &str) {
    let email = triggers
        .sub(format!("{}.{}", TRIGGER_PACKAGE, class))
        .sub("email");
    email.sub_text("recipientList", "");
    email.sub_text("subject", "$PROJECT_DEFAULT_SUBJECT");
    email.sub_text("body", "$PROJECT_DEFAULT_CONTENT");
    email.sub_text("sendToDevelopers", bool_text(false));
    email.sub_text("sendToRequester", bool_text(false));
    email.sub_text("includeCulprits", bool_text(false));
    email.sub_text("sendToRecipientList", bool_text(true));
}
