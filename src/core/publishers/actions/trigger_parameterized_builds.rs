use crate::core::error::AppError;
use crate::core::publishers::coerce::{bool_text, Flag};
use crate::core::publishers::params::{expect_list, resolve_entries, ActionConfig};
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde::Deserialize;
use serde_json::Value;

const TRIGGER_CONFIG: &str = "hudson.plugins.parameterizedtrigger.BuildTriggerConfig";
const PREDEFINED_PARAMETERS: &str = "hudson.plugins.parameterizedtrigger.PredefinedBuildParameters";
const GIT_REVISION_PARAMETERS: &str = "hudson.plugins.git.GitRevisionBuildParameters";
const FILE_PARAMETERS: &str = "hudson.plugins.parameterizedtrigger.FileBuildParameters";

fn default_condition() -> String {
    "ALWAYS".to_string()
}

/// One downstream project definition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectTrigger {
    pub project: String,
    #[serde(default)]
    pub predefined_parameters: Option<String>,
    #[serde(default)]
    pub git_revision: Option<Flag>,
    #[serde(default)]
    pub property_file: Option<String>,
    /// Passed through as given; the plugin owns the set of conditions.
    #[serde(default = "default_condition")]
    pub condition: String,
}

impl ProjectTrigger {
    fn has_parameters(&self) -> bool {
        self.predefined_parameters.is_some()
            || self.git_revision.is_some()
            || self.property_file.is_some()
    }
}

impl ActionConfig for ProjectTrigger {
    const REQUIRED: &'static [&'static str] = &["project"];
}

/// Trigger parameterized builds of other jobs.
pub struct ParameterizedTriggerPublisher;

impl Publisher for ParameterizedTriggerPublisher {
    fn name(&self) -> &'static str {
        "trigger-parameterized-builds"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let projects: Vec<ProjectTrigger> =
            resolve_entries(self.name(), expect_list(self.name(), config)?)?;

        let configs = parent
            .sub("hudson.plugins.parameterizedtrigger.BuildTrigger")
            .sub("configs");
        for project in projects {
            add_trigger_config(configs, project);
        }
        Ok(())
    }
}

fn add_trigger_config(configs: &mut XmlElement, project: ProjectTrigger) {
    let trigger = configs.sub(TRIGGER_CONFIG);
    let parameters = trigger.sub("configs");
    if project.has_parameters() {
        if let Some(properties) = &project.predefined_parameters {
            parameters
                .sub(PREDEFINED_PARAMETERS)
                .sub_text("properties", properties.as_str());
        }
        if project.git_revision.is_some_and(Flag::get) {
            parameters
                .sub(GIT_REVISION_PARAMETERS)
                .sub_text("combineQueuedCommits", bool_text(false));
        }
        if let Some(file) = project.property_file.as_deref().filter(|file| !file.is_empty()) {
            parameters.sub(FILE_PARAMETERS).sub_text("propertiesFile", file);
        }
    } else {
        parameters.set_attr("class", "java.util.Collections$EmptyList");
    }
    trigger.sub_text("projects", project.project);
    trigger.sub_text("condition", project.condition);
    trigger.sub_text("triggerWithNoParameters", bool_text(false));
}
