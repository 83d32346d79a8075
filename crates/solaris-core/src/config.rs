use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, SolarisError};

/// Top-level configuration for the Solaris application.
///
/// Loaded from `~/.solaris/config.toml` by default. Every section falls back
/// to its defaults when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolarisConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl SolarisConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SolarisConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SolarisError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Data directory holding the SQLite catalog.
    pub data_dir: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: "~/.solaris/data".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Catalog storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file name, relative to `general.data_dir`.
    pub db_file: String,
    /// Insert the reference catalog when the tables are empty.
    pub seed_if_empty: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_file: "solar_system.sqlite".to_string(),
            seed_if_empty: true,
        }
    }
}

/// Dialogue engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Whether the chat engine accepts messages.
    pub enabled: bool,
    /// Maximum inbound message length in characters.
    pub max_message_length: usize,
    /// Idle minutes after which a session falls back to Idle. 0 keeps
    /// sessions for the process lifetime.
    pub session_timeout_minutes: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_message_length: 2000,
            session_timeout_minutes: 0,
        }
    }
}

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3030,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = SolarisConfig::default();
        assert_eq!(config.general.data_dir, "~/.solaris/data");
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.storage.db_file, "solar_system.sqlite");
        assert!(config.storage.seed_if_empty);
        assert!(config.chat.enabled);
        assert_eq!(config.chat.max_message_length, 2000);
        assert_eq!(config.chat.session_timeout_minutes, 0);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3030);
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
data_dir = "/srv/solaris"
log_level = "debug"

[storage]
db_file = "catalog.db"
seed_if_empty = false

[chat]
enabled = false
max_message_length = 500
session_timeout_minutes = 45

[server]
host = "0.0.0.0"
port = 8080
"#;
        let file = create_temp_config(content);
        let config = SolarisConfig::load(file.path()).unwrap();
        assert_eq!(config.general.data_dir, "/srv/solaris");
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.storage.db_file, "catalog.db");
        assert!(!config.storage.seed_if_empty);
        assert!(!config.chat.enabled);
        assert_eq!(config.chat.max_message_length, 500);
        assert_eq!(config.chat.session_timeout_minutes, 45);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[chat]
session_timeout_minutes = 10
"#;
        let file = create_temp_config(content);
        let config = SolarisConfig::load(file.path()).unwrap();
        assert_eq!(config.chat.session_timeout_minutes, 10);
        // Remaining fields use defaults
        assert!(config.chat.enabled);
        assert_eq!(config.chat.max_message_length, 2000);
        assert_eq!(config.server.port, 3030);
        assert_eq!(config.storage.db_file, "solar_system.sqlite");
    }

    #[test]
    fn test_load_invalid_toml_is_config_error() {
        let file = create_temp_config("[chat\nenabled = ");
        let err = SolarisConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, SolarisError::Config(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = SolarisConfig::load(Path::new("/nonexistent/solaris.toml")).unwrap_err();
        assert!(matches!(err, SolarisError::Io(_)));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = SolarisConfig::default();
        config.server.port = 4040;
        config.chat.session_timeout_minutes = 5;
        config.save(&path).unwrap();

        let reloaded = SolarisConfig::load(&path).unwrap();
        assert_eq!(reloaded.server.port, 4040);
        assert_eq!(reloaded.chat.session_timeout_minutes, 5);
        assert_eq!(reloaded.general.data_dir, config.general.data_dir);
    }
}
