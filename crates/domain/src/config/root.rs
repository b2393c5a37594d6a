use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::fetch::FetchConfig;
use super::logging::LoggingConfig;
use crate::list_source::{ListCatalog, ListSource};

const LOCAL_CONFIG_PATH: &str = "pilist.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/pilist/config.toml";

/// Main configuration structure for pilist
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub fetch: FetchConfig,

    /// Curated lists selectable by key. Empty means the built-in set.
    #[serde(default)]
    pub sources: Vec<ListSource>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. pilist.toml in current directory
    /// 3. /etc/pilist/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Database path cannot be empty".to_string(),
            ));
        }

        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Fetch timeout must be at least 1 second".to_string(),
            ));
        }

        let mut keys = HashSet::new();
        for source in &self.sources {
            ListSource::validate_key(&source.key).map_err(ConfigError::Validation)?;
            ListSource::validate_url(&source.url).map_err(ConfigError::Validation)?;
            if !keys.insert(&*source.key) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate list source key '{}'",
                    source.key
                )));
            }
        }

        for source in &self.sources {
            for include in &source.includes {
                if !keys.contains(&**include) {
                    return Err(ConfigError::Validation(format!(
                        "List source '{}' includes unknown source '{}'",
                        source.key, include
                    )));
                }
            }
        }

        Ok(())
    }

    /// Builds the immutable source catalog handed to the loader.
    pub fn catalog(&self) -> ListCatalog {
        if self.sources.is_empty() {
            ListCatalog::builtin()
        } else {
            ListCatalog::new(self.sources.clone())
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
