//! JSON Configuration File Support
//!
//! The client reads a single JSON file at startup:
//!
//! ```json
//! {
//!   "instance_url": "https://misskey.example",
//!   "access_token": "..."
//! }
//! ```
//!
//! # Location
//!
//! Resolved with the following priority (highest first):
//! 1. `--config <PATH>` on the command line
//! 2. `MISSKEY_TUI_CONFIG` environment variable
//! 3. `config.json` in the working directory
//!
//! Any failure here is fatal: the binary reports it and exits before the
//! terminal UI starts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Default config file name, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the config path
pub const CONFIG_ENV_VAR: &str = "MISSKEY_TUI_CONFIG";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse JSON
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Instance connection settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the instance, e.g. `https://misskey.example`
    pub instance_url: String,
    /// API access token
    pub access_token: String,
}

impl Config {
    /// Parse and validate configuration from JSON text
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the URL is usable and the token is present
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.instance_url).map_err(|e| {
            ConfigError::Validation(format!(
                "instance_url {:?} is not a valid URL: {}",
                self.instance_url, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "instance_url must use http or https, got {:?}",
                url.scheme()
            )));
        }

        if url.host_str().is_none() {
            return Err(ConfigError::Validation(
                "instance_url has no host".to_string(),
            ));
        }

        if self.access_token.trim().is_empty() {
            return Err(ConfigError::Validation(
                "access_token must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Instance URL without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.instance_url.trim_end_matches('/')
    }

    /// Host part of the instance URL, for the status bar
    #[must_use]
    pub fn host(&self) -> String {
        Url::parse(&self.instance_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default()
    }
}

/// Resolve the config path from an explicit argument, the environment, or
/// the default file name
#[must_use]
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load and validate the config file at `path`
pub fn load_config_from_path(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_json(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_parse_valid_config() {
        let config = Config::from_json(
            r#"{"instance_url": "https://example.test/", "access_token": "tok"}"#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "https://example.test");
        assert_eq!(config.host(), "example.test");
        assert_eq!(config.access_token, "tok");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Config::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let err = Config::from_json(r#"{"instance_url": "https://example.test"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = Config::from_json(r#"{"instance_url": "ftp://example.test", "access_token": "t"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_rejects_empty_token() {
        let err = Config::from_json(r#"{"instance_url": "https://example.test", "access_token": " "}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = load_config_from_path(&path).unwrap_err();
        match err {
            ConfigError::Read { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"instance_url": "https://example.test", "access_token": "abc"}}"#
        )
        .unwrap();
        let config = load_config_from_path(file.path()).unwrap();
        assert_eq!(config.instance_url, "https://example.test");
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_config_path(Some(Path::new("/tmp/custom.json")));
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }
}
