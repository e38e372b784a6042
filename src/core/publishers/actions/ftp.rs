use crate::core::error::AppError;
use crate::core::publishers::builders::{build_publish_over, TransportSchema};
use crate::core::publishers::coerce::bool_text;
use crate::core::publishers::registry::Publisher;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde_json::Value;

pub const FTP_SCHEMA: TransportSchema = TransportSchema {
    console_prefix: "FTP: ",
    plugin_tag: "jenkins.plugins.publish__over__ftp.BapFtpPublisherPlugin",
    publisher_tag: "jenkins.plugins.publish__over__ftp.BapFtpPublisher",
    transfer_tag: "jenkins.plugins.publish__over__ftp.BapFtpTransfer",
    reference_tag: "jenkins.plugins.publish_over_ftp.BapFtpPublisherPlugin",
};

/// Upload files over FTP.
pub struct FtpPublisher;

impl Publisher for FtpPublisher {
    fn name(&self) -> &'static str {
        "ftp"
    }

    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError> {
        let mut nodes = build_publish_over(self.name(), &FTP_SCHEMA, config)?;
        nodes.transfer_mut().sub_text("asciiMode", bool_text(false));
        nodes.attach(parent)?;
        Ok(())
    }
}
