//! Configuration management for the lending client

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, path::PathBuf};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the request paths (`/api/...`, `/admin/...`) are appended to
    pub base_url: String,
    /// Optional whole-request timeout applied by the HTTP transport
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

/// Where session tokens and profiles are persisted
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub path: PathBuf,
}

/// Presentation policy for the toast queue
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ToastConfig {
    pub capacity: usize,
    pub min_duration_ms: u64,
    pub max_duration_ms: u64,
    pub default_duration_ms: u64,
}

impl ToastConfig {
    /// Clamp a requested duration into the configured bounds
    pub fn clamp_duration(&self, requested: Option<u64>) -> u64 {
        let max = self.max_duration_ms.max(self.min_duration_ms);
        requested
            .unwrap_or(self.default_duration_ms)
            .clamp(self.min_duration_ms, max)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Credentials used by the demo binary, never by the library
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DemoConfig {
    pub reader_code: Option<String>,
    pub reader_password: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (LENDING_API__BASE_URL, LENDING_TOAST__CAPACITY, ...)
            .add_source(
                Environment::with_prefix("LENDING")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override base URL from API_BASE_URL env var if present
            .set_override_option("api.base_url", env::var("API_BASE_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: None,
            user_agent: format!("lending-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            path: PathBuf::from("lending-storage.json"),
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            capacity: 3,
            min_duration_ms: 1200,
            max_duration_ms: 8000,
            default_duration_ms: 2500,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
