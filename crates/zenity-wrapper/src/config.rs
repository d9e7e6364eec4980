//! Configuration loading for zenity-wrapper

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default binary name looked up on `PATH`
pub const DEFAULT_BINARY: &str = "zenity";

/// zenity-wrapper configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Binary name or path
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Apply the GSettings/GTK environment overrides
    #[serde(default = "default_gtk_workaround")]
    pub gtk_workaround: bool,

    /// Extra environment variables for every invocation
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

fn default_binary() -> String {
    DEFAULT_BINARY.to_string()
}

fn default_gtk_workaround() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            gtk_workaround: default_gtk_workaround(),
            env: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from the user config file or use defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Get the config file path (~/.config/zenity-wrapper/config.toml)
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("zenity-wrapper")
            .join("config.toml")
    }

    /// Use a different binary name or path
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.binary, "zenity");
        assert!(config.gtk_workaround);
        assert!(config.env.is_empty());
    }

    #[test]
    fn test_config_path() {
        let path = Config::config_path();
        assert!(path.ends_with("zenity-wrapper/config.toml"));
        assert!(!path.components().any(|c| c.as_os_str() == "~"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "gtk_workaround = false\n\n[env]\nGDK_BACKEND = \"x11\"\n")?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.binary, "zenity");
        assert!(!config.gtk_workaround);
        assert_eq!(config.env.get("GDK_BACKEND").map(String::as_str), Some("x11"));
        Ok(())
    }

    #[test]
    fn test_invalid_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "binary = [")?;

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
        Ok(())
    }
}
