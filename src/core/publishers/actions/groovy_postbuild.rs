use crate::core::error::AppError;
use crate::core::publishers::params::expect_text;
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde_json::Value;

/// Run a groovy script after the build.
pub struct GroovyPostbuildPublisher;

impl Publisher for GroovyPostbuildPublisher {
    fn name(&self) -> &'static str {
        "groovy-postbuild"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let script = expect_text(self.name(), config)?;
        parent
            .sub("org.jvnet.hudson.plugins.groovypostbuild.GroovyPostbuildRecorder")
            .sub_text("groovyScript", script);
        Ok(())
    }
}
