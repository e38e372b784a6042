use crate::core::error::AppError;
use crate::core::publishers::coerce::{Flag, Scalar};
use crate::core::publishers::params::{resolve, ActionConfig};
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct Severity {
    #[serde(default = "Flag::on")]
    pub error: Flag,
    #[serde(default = "Flag::on")]
    pub warning: Flag,
    #[serde(default = "Flag::on")]
    pub style: Flag,
    #[serde(default = "Flag::on")]
    pub performance: Flag,
    #[serde(default = "Flag::on")]
    pub information: Flag,
}

impl Default for Severity {
    fn default() -> Self {
        Self {
            error: Flag::on(),
            warning: Flag::on(),
            style: Flag::on(),
            performance: Flag::on(),
            information: Flag::on(),
        }
    }
}

/// Threshold values are rendered verbatim; unset values are empty.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Thresholds {
    #[serde(default)]
    pub unstable: Scalar,
    #[serde(default)]
    pub new_unstable: Scalar,
    #[serde(default)]
    pub failure: Scalar,
    #[serde(default)]
    pub new_failure: Scalar,
    #[serde(default)]
    pub healthy: Scalar,
    #[serde(default)]
    pub unhealthy: Scalar,
    #[serde(default)]
    pub severity: Severity,
}

#[derive(Debug, Deserialize)]
pub struct Display {
    #[serde(default = "Flag::on")]
    pub sum: Flag,
    #[serde(default)]
    pub error: Flag,
    #[serde(default)]
    pub warning: Flag,
    #[serde(default)]
    pub style: Flag,
    #[serde(default)]
    pub performance: Flag,
    #[serde(default)]
    pub information: Flag,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            sum: Flag::on(),
            error: Flag::off(),
            warning: Flag::off(),
            style: Flag::off(),
            performance: Flag::off(),
            information: Flag::off(),
        }
    }
}

fn default_xysize() -> [Scalar; 2] {
    [Scalar::new("500"), Scalar::new("200")]
}

#[derive(Debug, Deserialize)]
pub struct Graph {
    #[serde(default = "default_xysize")]
    pub xysize: [Scalar; 2],
    #[serde(default)]
    pub display: Display,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            xysize: default_xysize(),
            display: Display::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CppcheckConfig {
    pub pattern: String,
    #[serde(default)]
    pub ignoreblankfiles: Flag,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub graph: Graph,
}

impl ActionConfig for CppcheckConfig {
    const REQUIRED: &'static [&'static str] = &["pattern"];
}

/// Publish Cppcheck results.
pub struct CppcheckPublisher;

impl Publisher for CppcheckPublisher {
    fn name(&self) -> &'static str {
        "cppcheck"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let config: CppcheckConfig = resolve(self.name(), config)?;
        let cppcheck = parent
            .sub("org.jenkinsci.plugins.cppcheck.CppcheckPublisher")
            .sub("cppcheckConfig");
        cppcheck.sub_text("pattern", config.pattern);
        cppcheck.sub_text("ignoreBlankFiles", config.ignoreblankfiles.text());

        let thresholds = &config.thresholds;
        let evaluation = cppcheck.sub("configSeverityEvaluation");
        evaluation.sub_text("threshold", thresholds.unstable.as_str());
        evaluation.sub_text("newThreshold", thresholds.new_unstable.as_str());
        evaluation.sub_text("failureThreshold", thresholds.failure.as_str());
        evaluation.sub_text("newFailureThreshold", thresholds.new_failure.as_str());
        evaluation.sub_text("healthy", thresholds.healthy.as_str());
        evaluation.sub_text("unHealthy", thresholds.unhealthy.as_str());
        let severity = &thresholds.severity;
        evaluation.sub_text("severityError", severity.error.text());
        evaluation.sub_text("severityWarning", severity.warning.text());
        evaluation.sub_text("severityStyle", severity.style.text());
        evaluation.sub_text("severityPerformance", severity.performance.text());
        evaluation.sub_text("severityInformation", severity.information.text());

        let graph = &config.graph;
        let [x_size, y_size] = &graph.xysize;
        let chart = cppcheck.sub("configGraph");
        chart.sub_text("xSize", x_size.as_str());
        chart.sub_text("ySize", y_size.as_str());
        let display = &graph.display;
        chart.sub_text("displayAllErrors", display.sum.text());
        chart.sub_text("displayErrorSeverity", display.error.text());
        chart.sub_text("displayWarningSeverity", display.warning.text());
        chart.sub_text("displayStyleSeverity", display.style.text());
        chart.sub_text("displayPerformanceSeverity", display.performance.text());
        chart.sub_text("displayInformationSeverity", display.information.text());
        Ok(())
    }
}
