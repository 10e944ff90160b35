//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Whether to expose interactive API docs (Swagger UI)
    pub enable_docs: bool,
    /// Global request timeout in seconds applied at the HTTP layer.
    pub request_timeout_seconds: u64,
    /// Allowed CORS origins. Use ["*"] to allow any (development only). Empty vector -> no external origins.
    pub allowed_origins: Vec<String>,
}

/// Where developer records live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Lost on restart
    Memory,
    /// One JSON document at `storage.path`
    File,
}

/// Record store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                enable_docs: true,
                request_timeout_seconds: 30,
                allowed_origins: vec!["*".to_string()],
            },
            storage: StorageConfig {
                backend: StorageBackend::File,
                path: PathBuf::from("data/developers.json"),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "json".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Later sources win: built-in defaults, `config/default`, `config/local`,
    /// `config/{ENV}`, then `DEVROSTER__SECTION__KEY` variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let defaults = config::Config::try_from(&Config::default())?;

        let mut builder = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false));

        if let Ok(env) = std::env::var("ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        builder
            .add_source(
                config::Environment::with_prefix("DEVROSTER")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_file_store() {
        let config = Config::default();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.path, PathBuf::from("data/developers.json"));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_backend_names_are_lowercase() {
        let backend: StorageBackend = serde_json::from_str("\"memory\"").unwrap();
        assert_eq!(backend, StorageBackend::Memory);
        assert_eq!(
            serde_json::to_string(&StorageBackend::File).unwrap(),
            "\"file\""
        );
    }

    #[test]
    fn test_load_without_files_matches_defaults() {
        let config = Config::load().unwrap();
        assert_eq!(config.logging.level, Config::default().logging.level);
        assert!(!config.server.host.is_empty());
    }
}
