//! Service configuration, loaded from a TOML file.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for the search service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// HTTP bind settings.
    pub server: ServerConfig,
    /// Index file locations.
    pub indices: IndexConfig,
}

/// HTTP bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4080,
        }
    }
}

/// Paths to the pre-built JSON index files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Site API reference index (Hack + PHP symbols).
    pub api: PathBuf,
    /// Guides index.
    pub guides: PathBuf,
    /// Imported php.net reference index.
    pub php_api: PathBuf,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            api: PathBuf::from("indices/api.json"),
            guides: PathBuf::from("indices/guides.json"),
            php_api: PathBuf::from("indices/php-api.json"),
        }
    }
}

impl SiteConfig {
    /// Loads configuration from a TOML file.
    pub async fn load(path: &Path) -> Result<Self, SearchError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            SearchError::Config(format!("failed to read config {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&raw).map_err(|e| {
            SearchError::Config(format!("failed to parse config {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.server.host.is_empty() {
            return Err(SearchError::Config("server.host must not be empty".into()));
        }
        if self.server.port == 0 {
            return Err(SearchError::Config("server.port must not be 0".into()));
        }
        Ok(())
    }
}
