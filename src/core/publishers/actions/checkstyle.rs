use crate::core::error::AppError;
use crate::core::publishers::coerce::{bool_text, Flag, Scalar};
use crate::core::publishers::params::{resolve, ActionConfig};
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde::Deserialize;
use serde_json::Value;

pub const HEALTH_THRESHOLDS: &[&str] = &["high", "normal", "low"];

fn default_health_threshold() -> String {
    "low".to_string()
}

/// Warning totals; unset or zero values render as empty elements.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    #[serde(default)]
    pub total_all: Option<Scalar>,
    #[serde(default)]
    pub total_high: Option<Scalar>,
    #[serde(default)]
    pub total_normal: Option<Scalar>,
    #[serde(default)]
    pub total_low: Option<Scalar>,
}

impl Totals {
    fn fields(&self) -> [(&'static str, Option<&Scalar>); 4] {
        [
            ("TotalAll", self.total_all.as_ref()),
            ("TotalHigh", self.total_high.as_ref()),
            ("TotalNormal", self.total_normal.as_ref()),
            ("TotalLow", self.total_low.as_ref()),
        ]
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Thresholds {
    #[serde(default)]
    pub unstable: Totals,
    #[serde(default)]
    pub failed: Totals,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckstyleConfig {
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub healthy: Option<Scalar>,
    #[serde(default)]
    pub un_healthy: Option<Scalar>,
    #[serde(default = "default_health_threshold")]
    pub health_threshold: String,
    #[serde(default)]
    pub default_encoding: String,
    #[serde(default)]
    pub can_run_on_failed: Flag,
    #[serde(default)]
    pub should_detect_modules: Flag,
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl ActionConfig for CheckstyleConfig {}

/// Publish Checkstyle trend reports.
pub struct CheckstylePublisher;

impl Publisher for CheckstylePublisher {
    fn name(&self) -> &'static str {
        "checkstyle"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let config: CheckstyleConfig = resolve(self.name(), config)?;
        if !HEALTH_THRESHOLDS.contains(&config.health_threshold.as_str()) {
            return Err(AppError::invalid_value(
                self.name(),
                "healthThreshold",
                &config.health_threshold,
                HEALTH_THRESHOLDS,
            ));
        }

        let checkstyle = parent.sub("hudson.plugins.checkstyle.CheckStylePublisher");
        optional_text(checkstyle, "healthy", config.healthy.as_ref());
        optional_text(checkstyle, "unHealthy", config.un_healthy.as_ref());
        checkstyle.sub_text("thresholdLimit", config.health_threshold.as_str());
        checkstyle.sub_text("pluginName", "[CHECKSTYLE] ");
        checkstyle.sub_text("defaultEncoding", config.default_encoding.as_str());
        checkstyle.sub_text("canRunOnFailed", config.can_run_on_failed.text());
        checkstyle.sub_text("useStableBuildAsReference", bool_text(false));
        checkstyle.sub_text("useDeltaValues", bool_text(false));

        let thresholds = checkstyle.sub("thresholds");
        for (prefix, totals) in [
            ("unstable", &config.thresholds.unstable),
            ("failed", &config.thresholds.failed),
        ] {
            for (suffix, value) in totals.fields() {
                optional_text(thresholds, &format!("{}{}", prefix, suffix), value);
            }
        }

        checkstyle.sub_text("shouldDetectModules", config.should_detect_modules.text());
        checkstyle.sub_text("dontComputeNew", bool_text(true));
        checkstyle.sub_text("doNotResolveRelativePaths", bool_text(false));
        checkstyle.sub_text("pattern", config.pattern);
        Ok(())
    }
}

fn optional_text(parent: &mut XmlElement, tag: &str, value: Option<&Scalar>) {
    match value.and_then(Scalar::truthy_text) {
        Some(text) => parent.sub_text(tag, text),
        None => parent.sub(tag),
    };
}
