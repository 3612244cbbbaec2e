//! Configuration management for homefront
//!
//! Handles the ~/.homefront/ directory structure and config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the listings site the client talks to.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8069".to_string(),
        }
    }
}

/// Returns the path to the homefront home directory (~/.homefront)
pub fn homefront_home() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".homefront"))
}

/// Paths to the profile directory and the files inside it
pub struct HomefrontPaths {
    pub root: PathBuf,
    pub config: PathBuf,
    /// Flat key-value store holding the membership sets.
    pub store_file: PathBuf,
}

impl HomefrontPaths {
    pub fn new() -> Result<Self> {
        let root = homefront_home()?;
        Ok(Self {
            config: root.join("config.toml"),
            store_file: root.join("store.json"),
            root,
        })
    }

    /// Create the profile directory if it doesn't exist
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.root).context("Failed to create homefront root")?;
        Ok(())
    }

    /// Check if homefront has been initialized
    pub fn is_initialized(&self) -> bool {
        self.config.exists()
    }
}

/// Load configuration from disk, falling back to defaults when absent
pub fn load_config(paths: &HomefrontPaths) -> Result<Config> {
    if !paths.config.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(&paths.config).context("Failed to read config.toml")?;
    toml::from_str(&content).context("Failed to parse config.toml")
}

/// Save configuration to disk
pub fn save_config(paths: &HomefrontPaths, config: &Config) -> Result<()> {
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(&paths.config, content).context("Failed to write config.toml")?;
    Ok(())
}
