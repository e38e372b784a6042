use crate::core::error::AppError;
use crate::core::publishers::builders::{build_publish_over, TransportSchema};
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde_json::Value;

pub const CIFS_SCHEMA: TransportSchema = TransportSchema {
    console_prefix: "CIFS: ",
    plugin_tag: "jenkins.plugins.publish__over__cifs.CifsPublisherPlugin",
    publisher_tag: "jenkins.plugins.publish__over__cifs.CifsPublisher",
    transfer_tag: "jenkins.plugins.publish__over__cifs.CifsTransfer",
    reference_tag: "jenkins.plugins.publish_over_cifs.CifsPublisherPlugin",
};

/// Upload files to a CIFS share.
pub struct CifsPublisher;

impl Publisher for CifsPublisher {
    fn name(&self) -> &'static str {
        "cifs"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        build_publish_over(self.name(), &CIFS_SCHEMA, config)?.attach(parent)?;
        Ok(())
    }
}
