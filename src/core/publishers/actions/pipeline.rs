use crate::core::error::AppError;
use crate::core::publishers::params::expect_text;
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde_json::Value;

/// Name the downstream project of a build pipeline.
///
/// An empty project name emits nothing, so templates can leave the last
/// stage of a pipeline blank.
pub struct PipelinePublisher;

impl Publisher for PipelinePublisher {
    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let project = expect_text(self.name(), config)?;
        if project.is_empty() {
            return Ok(());
        }
        parent
            .sub("au.com.centrumsystems.hudson.plugin.buildpipeline.trigger.BuildPipelineTrigger")
            .sub_text("downstreamProjectNames", project);
        Ok(())
    }
}
