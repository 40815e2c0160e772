//! Configuration for hostname resolution
//!
//! A TOML file holding the preferred edges (or a legacy region).
//! Configuration is loaded from:
//! - macOS: ~/Library/Application Support/com.chunder.chunder/config.toml
//! - Linux: ~/.config/chunder/config.toml
//! - Windows: %APPDATA%/chunder/chunder/config/config.toml

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::deprecation::OnDeprecatedMessage;
use crate::error::ResolveError;
use crate::resolver::resolve_chunder_uris;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Edge/region selection
    pub connection: ConnectionConfig,
}

/// Which signaling location to connect to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Edges in preference order
    pub edges: Vec<String>,
    /// Legacy region (mutually exclusive with `edges`)
    pub region: Option<String>,
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path).unwrap_or_else(|e| {
                warn!("Failed to load config from {:?}: {}, using defaults", path, e);
                Self::default()
            }),
            None => {
                debug!("No config directory found, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<(), ConfigError> {
        match Self::default_path() {
            Some(path) => self.save_to(&path),
            None => Err(ConfigError::NoConfigDir),
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;

        info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "chunder", "chunder")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Resolve the configured selection to signaling hostnames
    pub fn resolve(
        &self,
        on_deprecated: Option<OnDeprecatedMessage<'_>>,
    ) -> Result<Vec<String>, ResolveError> {
        let edges: Vec<&str> = self.connection.edges.iter().map(String::as_str).collect();
        resolve_chunder_uris(&edges, self.connection.region.as_deref(), on_deprecated)
    }

    /// Generate a sample configuration file content
    pub fn sample() -> String {
        let config = Self {
            connection: ConnectionConfig {
                edges: vec!["roaming".to_string()],
                region: None,
            },
        };
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("No configuration directory available")]
    NoConfigDir,
}
