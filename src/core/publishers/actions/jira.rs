use crate::core::error::AppError;
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde_json::Value;

/// Update JIRA issues referenced by the build.
pub struct JiraPublisher;

impl Publisher for JiraPublisher {
    fn name(&self) -> &'static str {
        "jira"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        _config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        parent.sub("hudson.plugins.jira.JiraIssueUpdater");
        Ok(())
    }
}
