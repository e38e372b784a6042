pub mod loader;

pub use loader::ConfigLoader;

use crate::core::xml::WriterOptions;
use crate::logging::config::LoggingConfig;
use serde::Deserialize;

/// Largest accepted output indent, in spaces.
pub const MAX_INDENT: usize = 8;

/// Main configuration loaded from pubxml.toml
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PubxmlConfig {
    /// Rendered XML layout
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging sinks and level
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Spaces per nesting level
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Emit `<?xml ...?>` before the root element
    #[serde(default = "default_xml_declaration")]
    pub xml_declaration: bool,
}

fn default_indent() -> usize {
    2
}

fn default_xml_declaration() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            indent: default_indent(),
            xml_declaration: default_xml_declaration(),
        }
    }
}

impl OutputConfig {
    pub fn writer_options(&self) -> WriterOptions {
        WriterOptions {
            indent: self.indent,
            xml_declaration: self.xml_declaration,
        }
    }
}
