//! Shared "publish over" transport fragment used by the FTP and CIFS actions.

use crate::core::error::AppError;
use crate::core::publishers::coerce::bool_text;
use crate::core::publishers::params::{resolve, ActionConfig};
use crate::core::types::ErrorCategory;
use crate::core::xml::XmlElement;
use serde::Deserialize;
use serde_json::Value;

/// Plugin-specific class names for one publish-over transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportSchema {
    pub console_prefix: &'static str,
    pub plugin_tag: &'static str,
    pub publisher_tag: &'static str,
    pub transfer_tag: &'static str,
    /// Class named by the `hostConfigurationAccess` back-reference.
    pub reference_tag: &'static str,
}

/// Options shared by every publish-over transport.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TransportConfig {
    pub site: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub excludes: String,
    #[serde(default)]
    pub remove_prefix: String,
}

impl ActionConfig for TransportConfig {
    const REQUIRED: &'static [&'static str] = &["site", "source", "target"];
}

/// The built plugin element plus its transfer element, kept apart until
/// [`TransportNodes::attach`] so callers can extend either one.
#[derive(Debug, Clone)]
pub struct TransportNodes {
    outer: XmlElement,
    transfer: XmlElement,
    transfers_path: String,
}

impl TransportNodes {
    /// Transfer element; fields appended here land after `cleanRemote`.
    pub fn transfer_mut(&mut self) -> &mut XmlElement {
        &mut self.transfer
    }

    /// Place the transfer inside its `transfers` list and append the plugin
    /// element to `parent`.
    pub fn attach(self, parent: &mut XmlElement) -> Result<&mut XmlElement, AppError> {
        let TransportNodes {
            mut outer,
            transfer,
            transfers_path,
        } = self;
        let transfers = outer.find_path_mut(&transfers_path).ok_or_else(|| {
            AppError::new(
                ErrorCategory::InternalError,
                format!("transport fragment lost its '{}' element", transfers_path),
            )
        })?;
        transfers.push(transfer);
        Ok(parent.push(outer))
    }
}

/// Resolve `config` and build the publish-over structure for `schema`.
pub fn build_publish_over(
    action: &str,
    schema: &TransportSchema,
    config: &Value,
) -> Result<TransportNodes, AppError> {
    let config: TransportConfig = resolve(action, config)?;
    Ok(publish_over(schema, &config))
}

pub fn publish_over(schema: &TransportSchema, config: &TransportConfig) -> TransportNodes {
    let mut outer = XmlElement::new(schema.plugin_tag);
    outer.sub_text("consolePrefix", schema.console_prefix);

    let delegate = outer.sub("delegate");
    let publishers = delegate.sub("publishers");
    let inner = publishers.sub(schema.publisher_tag);
    inner.sub_text("configName", config.site.as_str());
    inner.sub_text("verbose", bool_text(true));
    inner.sub("transfers");
    inner.sub_text("useWorkspaceInPromotion", bool_text(false));
    inner.sub_text("usePromotionTimestamp", bool_text(false));
    delegate.sub_text("continueOnError", bool_text(false));
    delegate.sub_text("failOnError", bool_text(false));
    delegate.sub_text("alwaysPublishFromMaster", bool_text(false));
    delegate.push(
        XmlElement::new("hostConfigurationAccess")
            .with_attr("class", schema.reference_tag)
            .with_attr("reference", "../.."),
    );

    let mut transfer = XmlElement::new(schema.transfer_tag);
    transfer.sub_text("remoteDirectory", config.target.as_str());
    transfer.sub_text("sourceFiles", config.source.as_str());
    transfer.sub_text("excludes", config.excludes.as_str());
    transfer.sub_text("removePrefix", config.remove_prefix.as_str());
    transfer.sub_text("remoteDirectorySDF", bool_text(false));
    transfer.sub_text("flatten", bool_text(false));
    transfer.sub_text("cleanRemote", bool_text(false));

    TransportNodes {
        outer,
        transfer,
        transfers_path: format!("delegate/publishers/{}/transfers", schema.publisher_tag),
    }
}
