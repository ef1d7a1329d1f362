use crate::debounce::DEFAULT_DEBOUNCE;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tagview_providers::DEFAULT_ENDPOINT;

pub const CONFIG_FILE: &str = "config.toml";
pub const LOG_FILE: &str = "tagview.log";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. XDG data directory
/// 3. ~/.tagview (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("tagview"));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".tagview"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Posts endpoint; the request limit is appended by the source.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Quiet period after the last search keystroke before refiltering.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE.as_millis() as u64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.endpoint, "https://dummyjson.com/posts");
        assert_eq!(config.debounce(), Duration::from_millis(500));
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let config = Config {
            endpoint: "http://localhost:8080/posts".to_string(),
            debounce_ms: 250,
        };
        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "debounce_ms = 100\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(loaded.debounce_ms, 100);

        Ok(())
    }

    #[test]
    fn test_invalid_file_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "debounce_ms = \"soon\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_explicit_data_dir_wins() -> Result<()> {
        let dir = resolve_data_dir(Some("/tmp/tagview-data"))?;
        assert_eq!(dir, PathBuf::from("/tmp/tagview-data"));
        Ok(())
    }
}
