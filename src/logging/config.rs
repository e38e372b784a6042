use crate::logging::layers::console::ConsoleOutput;
use crate::Result;
use anyhow::anyhow;
use serde::Deserialize;
use std::env;
use std::str::FromStr;
use tracing_subscriber::filter::Directive;

const DEFAULT_LEVEL: &str = "info";

fn default_level() -> String {
    DEFAULT_LEVEL.to_string()
}

/// Resolved logging configuration, read from the `[logging]` section of
/// `pubxml.toml` and env overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub default_level: String,
    #[serde(default)]
    pub console_output: ConsoleOutput,
    /// Colour level names with ANSI escapes.
    #[serde(default)]
    pub ansi: bool,
    /// Prefix each line with the emitting module path.
    #[serde(default)]
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: default_level(),
            console_output: ConsoleOutput::default(),
            ansi: false,
            show_target: false,
        }
    }
}

impl LoggingConfig {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("PUBXML_LOG_LEVEL") {
            if !level.trim().is_empty() {
                self.default_level = level;
            }
        }
        if let Ok(output) = env::var("PUBXML_CONSOLE_OUTPUT") {
            if let Ok(output) = ConsoleOutput::from_str(&output) {
                self.console_output = output;
            }
        }
        if let Ok(ansi) = env::var("PUBXML_LOG_ANSI") {
            if let Ok(ansi) = ansi.trim().parse::<bool>() {
                self.ansi = ansi;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        for directive in self.default_level.split(',').filter(|part| !part.trim().is_empty()) {
            Directive::from_str(directive.trim()).map_err(|_| {
                anyhow!(
                    "logging.default_level must be a valid tracing directive, got '{}'",
                    directive
                )
            })?;
        }
        Ok(())
    }
}
