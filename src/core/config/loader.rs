#![allow(clippy::result_large_err)]

use super::{PubxmlConfig, MAX_INDENT};
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::env;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "pubxml.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from workspace root (workspace/pubxml.toml)
    /// Environment variables override config file values
    /// A missing file yields defaults + env vars
    pub fn load_from_workspace(workspace_path: &Path) -> Result<PubxmlConfig, AppError> {
        let config_path = workspace_path.join(CONFIG_FILE_NAME);
        let config_file = Self::load_from_file(&config_path)?;
        Self::finish(config_file.unwrap_or_default())
    }

    /// Load config from an explicitly named file, which must exist
    pub fn load_explicit(path: &Path) -> Result<PubxmlConfig, AppError> {
        let config = Self::load_from_file(path)?.ok_or_else(|| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Config file {} does not exist", path.display()),
            )
        })?;
        Self::finish(config)
    }

    /// Load config from specific file path
    /// Returns Ok(None) if file doesn't exist
    pub fn load_from_file(path: &Path) -> Result<Option<PubxmlConfig>, AppError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to read config file {}: {}", path.display(), e),
            )
        })?;

        let config: PubxmlConfig = toml::from_str(&content).map_err(|e| {
            AppError::new(
                ErrorCategory::ValidationError,
                format!("Failed to parse config file {}: {}", path.display(), e),
            )
        })?;

        Ok(Some(config))
    }

    fn finish(mut config: PubxmlConfig) -> Result<PubxmlConfig, AppError> {
        Self::apply_env_overrides(&mut config);
        Self::validate_config(&config)?;
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration
    /// Environment variables take precedence over config file values
    fn apply_env_overrides(config: &mut PubxmlConfig) {
        if let Ok(indent_str) = env::var("PUBXML_OUTPUT_INDENT") {
            if let Ok(indent) = indent_str.parse::<usize>() {
                config.output.indent = indent;
            }
        }

        if let Ok(declaration_str) = env::var("PUBXML_OUTPUT_XML_DECLARATION") {
            if let Ok(declaration) = declaration_str.parse::<bool>() {
                config.output.xml_declaration = declaration;
            }
        }

        config.logging.apply_env_overrides();
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "PUBXML_OUTPUT_INDENT - Override spaces per nesting level (default: 2, max: 8)",
            "PUBXML_OUTPUT_XML_DECLARATION - Override XML declaration emission (true/false, default: true)",
            "PUBXML_LOG_LEVEL - Override the default tracing level (default: info)",
            "PUBXML_CONSOLE_OUTPUT - Override the console log sink (stdout/stderr/none, default: stderr)",
            "PUBXML_LOG_ANSI - Override ANSI colouring of console logs (true/false, default: false)",
        ]
    }

    /// Validate configuration values
    pub fn validate_config(config: &PubxmlConfig) -> Result<(), AppError> {
        if config.output.indent > MAX_INDENT {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                format!(
                    "output.indent must be at most {}, got {}",
                    MAX_INDENT, config.output.indent
                ),
            ));
        }

        config.logging.validate().map_err(|e| {
            AppError::new(ErrorCategory::ValidationError, e.to_string())
        })?;

        Ok(())
    }
}
