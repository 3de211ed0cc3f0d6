//! Startup error types.
//!
//! Per-call failures live next to the engines that raise them and reach the
//! client as tool errors. A [`ConfigError`] instead stops the server before
//! the catalog is loaded, so its message carries everything `main` prints.

use std::path::PathBuf;

use thiserror::Error;

/// Why the server configuration could not be used.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("cannot read config file {path}: {source}")]
    ReadError {
        /// Config file path.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON or has unknown fields.
    #[error("cannot parse config file {path}: {source}")]
    ParseError {
        /// Config file path.
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An explicitly named config file does not exist.
    #[error("config file {path} does not exist")]
    NotFound {
        /// Path given on the command line.
        path: PathBuf,
    },

    /// A setting holds an unsupported value (framework, log level).
    #[error("invalid config: {message}")]
    ValidationError {
        /// What was wrong, naming the accepted values.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use crate::config::Config;

    #[test]
    fn missing_file_names_the_path() {
        let error = ConfigError::NotFound {
            path: PathBuf::from("/etc/design-system-mcp/config.json"),
        };
        assert_eq!(
            error.to_string(),
            "config file /etc/design-system-mcp/config.json does not exist"
        );
    }

    #[test]
    fn parse_error_reports_the_json_position() {
        let source = serde_json::from_str::<Config>(r#"{ "catalog_path": 3 }"#).unwrap_err();
        let error = ConfigError::ParseError {
            path: PathBuf::from("config.json"),
            source,
        };
        let msg = error.to_string();
        assert!(msg.starts_with("cannot parse config file config.json: "));
        assert!(msg.contains("line 1"));
        assert!(error.source().is_some());
    }

    #[test]
    fn unknown_framework_is_explained() {
        let config: Config =
            serde_json::from_str(r#"{ "generation": { "default_framework": "solid" } }"#).unwrap();
        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.starts_with("invalid config: Unknown framework 'solid'"));
    }
}
