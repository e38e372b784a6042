//! Lookup-table driven framework type and threshold blocks for xUnit.

use crate::core::error::AppError;
use crate::core::publishers::coerce::{value_text, Flag};
use crate::core::publishers::diagnostics::{UNKNOWN_THRESHOLD_CATEGORY, UNKNOWN_XUNIT_TYPE};
use crate::core::publishers::params::{kind, resolve, ActionConfig};
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Supported framework names and the plugin element each maps to.
///
/// `boosttest` shares the AUnit element; the plugin release this targets
/// reads Boost results through that type.
pub const XUNIT_TYPES: &[(&str, &str)] = &[
    ("aunit", "AUnitJunitHudsonTestType"),
    ("boosttest", "AUnitJunitHudsonTestType"),
    ("checktype", "CheckType"),
    ("cpptest", "CppTestJunitHudsonTestType"),
    ("cppunit", "CppUnitJunitHudsonTestType"),
    ("fpcunit", "FPCUnitJunitHudsonTestType"),
    ("junit", "JUnitType"),
    ("mstest", "MSTestJunitHudsonTestType"),
    ("nunit", "NUnitJunitHudsonTestType"),
    ("phpunit", "PHPUnitJunitHudsonTestType"),
    ("tusar", "TUSARJunitHudsonTestType"),
    ("unittest", "UnitTestJunitHudsonTestType"),
    ("valgrind", "ValgrindJunitHudsonTestType"),
];

pub const THRESHOLD_CATEGORIES: &[(&str, &str)] = &[
    ("failed", "org.jenkinsci.plugins.xunit.threshold.FailedThreshold"),
    ("skipped", "org.jenkinsci.plugins.xunit.threshold.SkippedThreshold"),
];

/// Threshold names (matched case-insensitively) and their element tags.
pub const THRESHOLD_NAMES: &[(&str, &str)] = &[
    ("unstable", "unstableThreshold"),
    ("unstablenew", "unstableNewThreshold"),
    ("failure", "failureThreshold"),
    ("failurenew", "failureNewThreshold"),
];

pub const THRESHOLD_MODES: &[(&str, &str)] = &[("number", "1"), ("percent", "2")];

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, tag)| *tag)
}

fn keys(table: &[(&'static str, &'static str)]) -> Vec<&'static str> {
    table.iter().map(|(name, _)| *name).collect()
}

/// Per-framework options.
#[derive(Debug, Clone, Deserialize)]
pub struct FrameworkConfig {
    #[serde(default)]
    pub pattern: String,
    #[serde(default = "Flag::on")]
    pub requireupdate: Flag,
    #[serde(default = "Flag::on")]
    pub deleteoutput: Flag,
    #[serde(default = "Flag::on")]
    pub stoponerror: Flag,
}

impl ActionConfig for FrameworkConfig {}

/// Append one `<types>` block per recognised framework entry, in order.
/// Unrecognised framework names are skipped with a warning.
pub fn build_types(
    xunit: &mut XmlElement,
    action: &str,
    types: &[Value],
    diagnostics: &mut Diagnostics,
) -> Result<(), AppError> {
    for (index, entry) in types.iter().enumerate() {
        let (name, sub_config) = single_entry(action, "types", index, entry)?;
        let Some(tag) = lookup(XUNIT_TYPES, name) else {
            diagnostics.warn(
                action,
                UNKNOWN_XUNIT_TYPE,
                format!("Requested xUnit type '{}' is not yet supported", name),
            );
            continue;
        };
        let framework: FrameworkConfig = resolve(action, sub_config)
            .map_err(|err| err.with_entry("type", name))?;

        let element = xunit.sub("types").sub(tag);
        element.sub_text("pattern", framework.pattern);
        element.sub_text("failIfNotNew", framework.requireupdate.text());
        element.sub_text("deleteOutputFiles", framework.deleteoutput.text());
        element.sub_text("stopProcessingIfError", framework.stoponerror.text());
    }
    Ok(())
}

/// Append the `<thresholds>` element. Entries keyed by anything other than
/// `failed`/`skipped` are skipped with a warning; threshold names outside
/// [`THRESHOLD_NAMES`] are fatal.
pub fn build_thresholds(
    xunit: &mut XmlElement,
    action: &str,
    thresholds: &[Value],
    diagnostics: &mut Diagnostics,
) -> Result<(), AppError> {
    let container = xunit.sub("thresholds");
    for (index, entry) in thresholds.iter().enumerate() {
        let Value::Object(categories) = entry else {
            return Err(AppError::invalid_shape(
                action,
                format!("thresholds[{}] must be a mapping, got {}", index, kind(entry)),
            ));
        };
        for (category, values) in categories {
            let Some(tag) = lookup(THRESHOLD_CATEGORIES, category) else {
                diagnostics.warn(
                    action,
                    UNKNOWN_THRESHOLD_CATEGORY,
                    format!(
                        "Unrecognized threshold '{}', should be 'failed' or 'skipped'",
                        category
                    ),
                );
                continue;
            };
            let block = container.sub(tag);
            for (name, value) in threshold_values(action, category, values)? {
                let normalized = name.to_lowercase();
                let element_tag = lookup(THRESHOLD_NAMES, &normalized).ok_or_else(|| {
                    AppError::invalid_value(action, "threshold name", name, &keys(THRESHOLD_NAMES))
                })?;
                block.sub_text(element_tag, value_text(value));
            }
        }
    }
    Ok(())
}

/// Literal encoding of the threshold mode: `1` for absolute counts, `2` for percentages.
pub fn threshold_mode(action: &str, mode: &str) -> Result<&'static str, AppError> {
    lookup(THRESHOLD_MODES, mode)
        .ok_or_else(|| AppError::invalid_value(action, "thresholdmode", mode, &keys(THRESHOLD_MODES)))
}

fn threshold_values<'a>(
    action: &str,
    category: &str,
    values: &'a Value,
) -> Result<Vec<(&'a String, &'a Value)>, AppError> {
    match values {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => Ok(map.iter().collect()),
        other => Err(AppError::invalid_shape(
            action,
            format!("threshold '{}' must be a mapping, got {}", category, kind(other)),
        )),
    }
}

fn single_entry<'a>(
    action: &str,
    field: &str,
    index: usize,
    entry: &'a Value,
) -> Result<(&'a str, &'a Value), AppError> {
    let shape_error = || {
        AppError::invalid_shape(
            action,
            format!(
                "{}[{}] must be a single-key mapping of name to options",
                field, index
            ),
        )
    };
    match entry {
        Value::Object(map) if map.len() == 1 => first_pair(map).ok_or_else(shape_error),
        Value::String(name) => Ok((name.as_str(), &Value::Null)),
        _ => Err(shape_error()),
    }
}

fn first_pair(map: &Map<String, Value>) -> Option<(&str, &Value)> {
    map.iter().next().map(|(key, value)| (key.as_str(), value))
}
