use crate::core::error::AppError;
use crate::core::publishers::coerce::bool_text;
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde_json::Value;

const COVERAGE_METRIC: &str = "hudson.plugins.cobertura.targets.CoverageMetric";

/// Target element name and its (metric, percentage) pairs.
pub const COBERTURA_TARGETS: &[(&str, &[(&str, &str)])] = &[
    (
        "healthyTarget",
        &[("CONDITIONAL", "70"), ("LINE", "80"), ("METHOD", "80")],
    ),
    (
        "unhealthyTarget",
        &[("CONDITIONAL", "0"), ("LINE", "0"), ("METHOD", "0")],
    ),
    (
        "failingTarget",
        &[("CONDITIONAL", "0"), ("LINE", "0"), ("METHOD", "0")],
    ),
];

/// Cobertura coverage report with fixed targets. Any config is ignored.
pub struct CoveragePublisher;

impl Publisher for CoveragePublisher {
    fn name(&self) -> &'static str {
        "coverage"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        _config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let cobertura = parent.sub("hudson.plugins.cobertura.CoberturaPublisher");
        cobertura.sub_text("coberturaReportFile", "**/coverage.xml");
        cobertura.sub_text("onlyStable", bool_text(false));
        for (target, metrics) in COBERTURA_TARGETS {
            let targets = cobertura.sub(*target).push(
                XmlElement::new("targets")
                    .with_attr("class", "enum-map")
                    .with_attr("enum-type", COVERAGE_METRIC),
            );
            for (metric, value) in metrics.iter() {
                let entry = targets.sub("entry");
                entry.sub_text(COVERAGE_METRIC, *metric);
                entry.sub_text("int", *value);
            }
        }
        cobertura.sub_text("sourceEncoding", "ASCII");
        Ok(())
    }
}
