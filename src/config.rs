//! Configuration for the slow reader
//!
//! The only tunable is the daemon socket path. Resolution order: an explicit
//! config file, then the `CRUST_SOCKET` environment variable, then the
//! daemon's default runtime path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime directory of the daemon under test
const RUN_DIRECTORY: &str = "/var/run/crust";

/// Socket filename inside the runtime directory
const SOCKET_NAME: &str = "crust.sock";

/// Slow reader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Path of the daemon's listening socket
    #[serde(default = "default_socket_path")]
    pub socket_path: PathBuf,
}

/// The daemon's well-known socket path
pub fn default_socket_path() -> PathBuf {
    PathBuf::from(RUN_DIRECTORY).join(SOCKET_NAME)
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            socket_path: default_socket_path(),
        }
    }
}

impl ReaderConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let socket_path = std::env::var("CRUST_SOCKET")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_socket_path());

        Self { socket_path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        PathBuf::from("/etc/crust/slowread.yaml")
    }

    /// Load from an explicit file if given, else the default file if present,
    /// else the environment
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_file {
            return Self::from_file(path);
        }

        let default_file = Self::default_config_path();
        if default_file.exists() {
            Self::from_file(&default_file)
        } else {
            Ok(Self::from_env())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_from_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("slowread.yaml");

        std::fs::write(
            &config_path,
            r#"
socket_path: /tmp/crust-test.sock
"#,
        )
        .unwrap();

        let config = ReaderConfig::from_file(&config_path).unwrap();

        assert_eq!(config.socket_path, PathBuf::from("/tmp/crust-test.sock"));
    }

    #[test]
    fn test_config_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("slowread.yaml");

        std::fs::write(&config_path, "{}\n").unwrap();

        let config = ReaderConfig::from_file(&config_path).unwrap();

        assert_eq!(config.socket_path, PathBuf::from("/var/run/crust/crust.sock"));
    }

    #[test]
    fn test_missing_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let result = ReaderConfig::load(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
