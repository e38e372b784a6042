use crate::core::error::AppError;
use crate::core::publishers::coerce::bool_text;
use crate::core::publishers::params::{resolve, ActionConfig};
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct JunitConfig {
    pub results: String,
}

impl ActionConfig for JunitConfig {
    const REQUIRED: &'static [&'static str] = &["results"];
}

/// Publish JUnit test results.
pub struct JunitPublisher;

impl Publisher for JunitPublisher {
    fn name(&self) -> &'static str {
        "junit"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let config: JunitConfig = resolve(self.name(), config)?;
        let archiver = parent.sub("hudson.tasks.junit.JUnitResultArchiver");
        archiver.sub_text("testResults", config.results);
        archiver.sub_text("keepLongStdio", bool_text(true));
        archiver.sub("testDataPublishers");
        Ok(())
    }
}
