//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, Environment, File};
use mesa_core::MesaError;
use std::path::Path;
use tracing::{debug, info};

/// Configuration loader over layered file and environment sources.
#[derive(Clone)]
pub struct ConfigLoader {
    config: AppConfig,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides (not committed)
    /// 4. Environment variables with `MESA_` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, MesaError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self { config, config_dir })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, MesaError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, MesaError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("MESA_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        // 1. Load default configuration
        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        // 2. Load environment-specific configuration
        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        // 3. Load local overrides (not committed to version control)
        let local_path = format!("{}/local.toml", config_dir);
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        // 4. Override with environment variables (MESA_ prefix)
        builder = builder.add_source(
            Environment::with_prefix("MESA")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| MesaError::Configuration(e.to_string()))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| MesaError::Configuration(e.to_string()))?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates critical configuration values.
    fn validate_config(config: &AppConfig) -> Result<(), MesaError> {
        if config.database.url.is_empty() {
            return Err(MesaError::Configuration(
                "database.url must not be empty".to_string(),
            ));
        }
        if config.redis.enabled && config.redis.url.is_empty() {
            return Err(MesaError::Configuration(
                "redis.url must not be empty when redis is enabled".to_string(),
            ));
        }
        if config.cache.listing_ttl_secs == 0 {
            return Err(MesaError::Configuration(
                "cache.listing_ttl_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("config_dir", &self.config_dir)
            .finish_non_exhaustive()
    }
}
