//! Configuration types and loading

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::adapter::DEFAULT_TIMEOUT_MS;
use crate::history::DEFAULT_CAPACITY;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Adapter process configuration
    pub adapter: AdapterConfig,

    /// Conversation history configuration
    pub history: HistoryConfig,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR); the CLI flag wins
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .nlsh.yml
        let local_config = PathBuf::from(".nlsh.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/nlsh/nlsh.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("nlsh").join("nlsh.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Adapter process configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Path to the adapter executable
    pub path: PathBuf,

    /// Deadline for one adapter exchange, in milliseconds
    pub timeout_ms: u64,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./ai_adapter.py"),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Conversation history configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Number of turns retained and replayed to the adapter
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.adapter.path, PathBuf::from("./ai_adapter.py"));
        assert_eq!(config.adapter.timeout_ms, 60_000);
        assert_eq!(config.history.capacity, 8);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_parse_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("adapter:\n  path: /usr/local/bin/adapter\n").unwrap();
        assert_eq!(config.adapter.path, PathBuf::from("/usr/local/bin/adapter"));
        assert_eq!(config.adapter.timeout_ms, 60_000);
        assert_eq!(config.history.capacity, 8);
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = "adapter:\n  path: ./my_adapter\n  timeout_ms: 5000\nhistory:\n  capacity: 4\nlog_level: DEBUG\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.adapter.path, PathBuf::from("./my_adapter"));
        assert_eq!(config.adapter.timeout_ms, 5000);
        assert_eq!(config.history.capacity, 4);
        assert_eq!(config.log_level.as_deref(), Some("DEBUG"));
    }

    #[test]
    fn test_load_explicit_path() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nlsh.yml");
        fs::write(&path, "adapter:\n  timeout_ms: 1234\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.adapter.timeout_ms, 1234);
    }

    #[test]
    fn test_load_explicit_missing_path_fails() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing.yml");

        assert!(Config::load(Some(&path)).is_err());
    }
}
