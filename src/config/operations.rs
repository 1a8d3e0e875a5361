//! Config loading, discovery, and validation.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{JotterError, Result};
use log::debug;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            JotterError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("loading config from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Load `jotter.yaml` from the working directory if it exists, otherwise
    /// return the defaults.
    pub fn discover() -> Result<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(path)
        } else {
            debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields are silently ignored; an empty document is all defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| JotterError::Config(format!("failed to parse config YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| JotterError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validation rules:
    /// - `data_file` must be non-empty and name a file, not a directory
    /// - `bot_name` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() || self.data_file.file_name().is_none() {
            return Err(JotterError::Config(format!(
                "data_file must name a file (found '{}')",
                self.data_file.display()
            )));
        }

        if self.bot_name.trim().is_empty() {
            return Err(JotterError::Config(
                "bot_name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
