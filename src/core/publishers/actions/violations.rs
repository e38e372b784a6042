use crate::core::error::AppError;
use crate::core::publishers::builders::build_type_configs;
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde_json::Value;

/// Publish code style violations for every known system.
pub struct ViolationsPublisher;

impl Publisher for ViolationsPublisher {
    fn name(&self) -> &'static str {
        "violations"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let mut settings = XmlElement::new("config");
        settings
            .push(XmlElement::new("suppressions").with_attr("class", "tree-set"))
            .sub("no-comparator");
        build_type_configs(&mut settings, self.name(), config, diagnostics)?;
        settings.sub_text("limit", "100");
        settings.sub("sourcePathPattern");
        settings.sub("fauxProjectPath");
        settings.sub_text("encoding", "default");

        parent
            .sub("hudson.plugins.violations.ViolationsPublisher")
            .push(settings);
        Ok(())
    }
}
