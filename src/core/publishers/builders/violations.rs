//! Fixed-size type table for the Violations plugin.

use crate::core::error::AppError;
use crate::core::publishers::coerce::{bool_text, Scalar};
use crate::core::publishers::diagnostics::UNKNOWN_VIOLATION_SYSTEM;
use crate::core::publishers::params::{kind, resolve, ActionConfig};
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde::Deserialize;
use serde_json::Value;

/// Every system the plugin knows about, in schema order.
pub const VIOLATION_SYSTEMS: &[&str] = &[
    "checkstyle",
    "codenarc",
    "cpd",
    "cpplint",
    "csslint",
    "findbugs",
    "fxcop",
    "gendarme",
    "jcreport",
    "jslint",
    "pep8",
    "pmd",
    "pylint",
    "simian",
    "stylecop",
];

fn default_min() -> Scalar {
    Scalar::new("10")
}

fn default_limit() -> Scalar {
    Scalar::new("999")
}

/// Thresholds for one violations system.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_min")]
    pub min: Scalar,
    #[serde(default = "default_limit")]
    pub max: Scalar,
    #[serde(default = "default_limit")]
    pub unstable: Scalar,
    #[serde(default)]
    pub pattern: Option<String>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_limit(),
            unstable: default_limit(),
            pattern: None,
        }
    }
}

impl ActionConfig for SystemConfig {}

/// Append `typeConfigs` with one entry per known system, configured or not.
///
/// Keys of `systems` that name no known system are reported and ignored.
pub fn build_type_configs(
    parent: &mut XmlElement,
    action: &str,
    systems: &Value,
    diagnostics: &mut Diagnostics,
) -> Result<(), AppError> {
    let configured = match systems {
        Value::Null => serde_json::Map::new(),
        Value::Object(map) => map.clone(),
        other => {
            return Err(AppError::invalid_shape(
                action,
                format!("expected a mapping of violation systems, got {}", kind(other)),
            ))
        }
    };

    for name in configured.keys() {
        if !VIOLATION_SYSTEMS.contains(&name.as_str()) {
            diagnostics.warn(
                action,
                UNKNOWN_VIOLATION_SYSTEM,
                format!("Unrecognized violations system '{}' is ignored", name),
            );
        }
    }

    let configs = parent.sub("typeConfigs");
    configs.sub("no-comparator");
    for name in VIOLATION_SYSTEMS {
        let system = match configured.get(*name) {
            Some(value) => {
                resolve::<SystemConfig>(action, value).map_err(|err| err.with_entry("system", *name))?
            }
            None => SystemConfig::default(),
        };
        add_entry(configs, name, &system);
    }
    Ok(())
}

fn add_entry(configs: &mut XmlElement, name: &str, system: &SystemConfig) {
    let entry = configs.sub("entry");
    entry.sub_text("string", name);
    let type_config = entry.sub("hudson.plugins.violations.TypeConfig");
    type_config.sub_text("type", name);
    type_config.sub_text("min", system.min.as_str());
    type_config.sub_text("max", system.max.as_str());
    type_config.sub_text("unstable", system.unstable.as_str());
    type_config.sub_text("usePattern", bool_text(false));
    match system.pattern.as_deref().filter(|pattern| !pattern.is_empty()) {
        Some(pattern) => type_config.sub_text("pattern", pattern),
        None => type_config.sub("pattern"),
    };
}
