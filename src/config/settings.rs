//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use std::path::PathBuf;

use serde::Deserialize;

use crate::engine::generate::{CssOptions, Framework, GenerateError};
use crate::error::ConfigError;
use crate::mcp::tools::GenerationDefaults;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Directory holding the catalog JSON files. The built-in catalog is used when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Directory holding screenshot images.
    #[serde(default)]
    pub screenshots_path: Option<PathBuf>,

    /// Generation defaults.
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generation.framework()?;

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }
}

/// Defaults for the generation tools.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Emit `:hover` blocks in generated CSS.
    #[serde(default = "default_true")]
    pub include_hover: bool,

    /// Emit `:focus-visible` blocks in generated CSS.
    #[serde(default = "default_true")]
    pub include_focus: bool,

    /// Emit dark-mode media blocks in generated CSS.
    #[serde(default)]
    pub include_dark_mode: bool,

    /// Skeleton framework used when a call names none.
    #[serde(default = "default_framework")]
    pub default_framework: String,
}

impl GenerationConfig {
    /// Parses the default framework.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unsupported framework name.
    pub fn framework(&self) -> Result<Framework, ConfigError> {
        self.default_framework
            .parse()
            .map_err(|e: GenerateError| ConfigError::ValidationError {
                message: e.to_string(),
            })
    }

    /// Converts the section into tool defaults.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unsupported framework name.
    pub fn defaults(&self) -> Result<GenerationDefaults, ConfigError> {
        Ok(GenerationDefaults {
            css: CssOptions {
                include_hover: self.include_hover,
                include_focus: self.include_focus,
                include_dark_mode: self.include_dark_mode,
            },
            framework: self.framework()?,
        })
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            include_hover: true,
            include_focus: true,
            include_dark_mode: false,
            default_framework: default_framework(),
        }
    }
}

const fn default_true() -> bool {
    true
}

fn default_framework() -> String {
    Framework::Html.name().to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
