use crate::core::error::AppError;
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde_json::Value;

/// Let users claim build failures.
pub struct ClaimBuildPublisher;

impl Publisher for ClaimBuildPublisher {
    fn name(&self) -> &'static str {
        "claim-build"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        _config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        parent.sub("hudson.plugins.claim.ClaimPublisher");
        Ok(())
    }
}
