//! Configuration management for ConectaSonda server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which record store backs the API
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Seeded in-memory records, status updates are kept for the process lifetime
    Fixture,
    /// Supabase table read through PostgREST, read-only
    Supabase,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    /// Table holding the equipment rows
    pub table: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables (with prefix CONECTASONDA_), e.g. CONECTASONDA_STORE__BACKEND
            .add_source(
                Environment::with_prefix("CONECTASONDA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("store.supabase_url", env::var("SUPABASE_URL").ok())?
            .set_override_option("store.supabase_key", env::var("SUPABASE_KEY").ok())?
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field requirements that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.backend == StoreBackend::Supabase {
            let missing = |value: &Option<String>| {
                value.as_deref().map(str::trim).unwrap_or_default().is_empty()
            };
            if missing(&self.store.supabase_url) {
                return Err(ConfigError::Message(
                    "SUPABASE_URL is required when store.backend = supabase".to_string(),
                ));
            }
            if missing(&self.store.supabase_key) {
                return Err(ConfigError::Message(
                    "SUPABASE_KEY is required when store.backend = supabase".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Fixture,
            supabase_url: None,
            supabase_key: None,
            table: "equipments".to_string(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_needs_no_credentials() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_supabase_requires_url_and_key() {
        let mut config = AppConfig::default();
        config.store.backend = StoreBackend::Supabase;
        assert!(config.validate().is_err());

        config.store.supabase_url = Some("https://demo.supabase.co".to_string());
        config.store.supabase_key = Some("   ".to_string());
        assert!(config.validate().is_err());

        config.store.supabase_key = Some("anon-key".to_string());
        assert!(config.validate().is_ok());
    }
}
