mod file_creation;

use std::{fs, path::Path};

use regex::Regex;
use tracing::{debug, instrument};

use super::Config;
use crate::{BridgeError, Result};
use file_creation::create_default_config_file;

impl Config {
    /// Writes a default configuration file at `path` unless one exists.
    ///
    /// Returns whether a file was created, so callers can report it once
    /// logging is up.
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be created
    pub fn ensure_file(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }

        create_default_config_file(path)?;
        Ok(true)
    }

    /// Loads the configuration file at `path`, creating it with defaults
    /// when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or read
    /// - The TOML content is invalid
    /// - A value fails validation (zero timeouts, bad player patterns)
    #[instrument]
    pub fn load(path: &Path) -> Result<Config> {
        if Self::ensure_file(path)? {
            debug!("wrote default configuration to {}", path.display());
        }

        let content = fs::read_to_string(path).map_err(|e| BridgeError::io_at(e, path))?;
        let config = Self::from_toml(&content, Some(path))?;
        config.validate()?;

        Ok(config)
    }

    /// Parses configuration from a TOML string without validating it.
    ///
    /// # Errors
    /// Returns `BridgeError::TomlParseError` if the content is not valid TOML
    /// for this schema
    pub fn from_toml(content: &str, path: Option<&Path>) -> Result<Config> {
        toml::from_str(content).map_err(|e| BridgeError::toml_parse(e, path))
    }

    /// Checks values that deserialize fine but cannot work at runtime.
    ///
    /// # Errors
    /// Returns `BridgeError::ConfigValidation` naming the offending section
    pub fn validate(&self) -> Result<()> {
        if self.audio.helper.trim().is_empty() {
            return Err(BridgeError::ConfigValidation {
                component: "audio".to_string(),
                details: "helper must name a program".to_string(),
            });
        }

        if self.audio.helper_timeout_secs == 0 {
            return Err(BridgeError::ConfigValidation {
                component: "audio".to_string(),
                details: "helper_timeout_secs must be greater than zero".to_string(),
            });
        }

        if self.media.artwork_timeout_secs == 0 {
            return Err(BridgeError::ConfigValidation {
                component: "media".to_string(),
                details: "artwork_timeout_secs must be greater than zero".to_string(),
            });
        }

        for pattern in &self.media.ignored_players {
            Regex::new(pattern).map_err(|e| BridgeError::ConfigValidation {
                component: "media".to_string(),
                details: format!("invalid ignored_players pattern '{pattern}': {e}"),
            })?;
        }

        Ok(())
    }
}
