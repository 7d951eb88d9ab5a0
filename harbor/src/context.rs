//! Application context that holds the connected Harbor handle
//!
//! Configuration is resolved in this order:
//! 1. Built-in defaults
//! 2. Config file (`--config`, `HARBOR_CONFIG` or the default location)
//! 3. `HARBOR__*` environment variables
//!
//! Once built, the context is passed as read-only to the command handlers.

use crate::format::OutputFormat;
use libharbor::{Config, Harbor};
use std::path::{Path, PathBuf};

/// Application context with resolved configuration
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Connected Harbor handle
    pub harbor: Harbor,
    /// Output format requested on the command line
    pub format: OutputFormat,
}

impl AppContext {
    /// Load configuration and connect.
    ///
    /// An explicitly given config file must exist. The default location is
    /// optional.
    pub fn build(config_path: Option<&Path>, format: OutputFormat) -> Result<Self, String> {
        let config = load_config(config_path)?;
        let harbor = Harbor::from_config(&config).map_err(|e| e.to_string())?;
        Ok(Self { harbor, format })
    }
}

/// Load configuration from `explicit`, or from the default path when it exists.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, String> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(default_config_path()).filter(|p| p.exists()),
    };
    tracing::debug!(path = ?path, "Loading configuration");
    Config::load(path.as_deref()).map_err(|e| e.to_string())
}

/// Default configuration file path
pub fn default_config_path() -> PathBuf {
    // Default to ~/.config/harbor/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("harbor").join("config.yaml")
    } else {
        // Fallback to current directory
        PathBuf::from("config.yaml")
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
