//! Configuration management for greetd.
//!
//! Loads settings from a TOML file or uses defaults. Lookup order:
//! `--config`, then `$GREETD_CONFIG`, then /etc/greeter/config.toml.

use anyhow::{Context, Result};
use greeter_common::{GreeterError, DEFAULT_BIND_ADDR, DEFAULT_SALUTATION, MAX_NAME_LEN};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/greeter/config.toml";

/// Environment variable overriding the config file path
pub const CONFIG_ENV: &str = "GREETD_CONFIG";

/// Full daemon configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GreetdConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub greeting: GreetingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind, e.g. "127.0.0.1:7866"
    #[serde(default = "default_bind")]
    pub bind: String,
}

/// Greeting text settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingConfig {
    /// Word placed before the name
    #[serde(default = "default_salutation")]
    pub salutation: String,

    /// Longest accepted name, in characters
    #[serde(default = "default_max_name_len")]
    pub max_name_len: usize,
}

fn default_bind() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_salutation() -> String {
    DEFAULT_SALUTATION.to_string()
}

fn default_max_name_len() -> usize {
    MAX_NAME_LEN
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            salutation: default_salutation(),
            max_name_len: default_max_name_len(),
        }
    }
}

impl GreetdConfig {
    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// An explicit path that does not exist is an error; the implicit
    /// locations are optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let path = std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(CONFIG_PATH));

        if path.exists() {
            Self::load_from(&path)
        } else {
            info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load and validate a specific config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: GreetdConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;

        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check values serde cannot check
    pub fn validate(&self) -> Result<(), GreeterError> {
        self.bind_addr()?;

        if self.greeting.max_name_len == 0 {
            return Err(GreeterError::Config(
                "greeting.max_name_len must be at least 1".to_string(),
            ));
        }
        if self.greeting.salutation.trim().is_empty() {
            warn!("greeting.salutation is blank");
        }

        Ok(())
    }

    /// Parsed listener address
    pub fn bind_addr(&self) -> Result<SocketAddr, GreeterError> {
        self.server.bind.parse().map_err(|e| {
            GreeterError::Config(format!("invalid server.bind '{}': {}", self.server.bind, e))
        })
    }
}
