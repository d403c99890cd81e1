//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BJJ_ELITE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use bjj_elite::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod progression;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use progression::{ProgressionConfig, MAX_HISTORY_LIMIT};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// local setup on port 3000 with `bjj_elite.db` in the working directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (SQLite)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// XP and streak rules
    #[serde(default)]
    pub progression: ProgressionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BJJ_ELITE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BJJ_ELITE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `BJJ_ELITE__DATABASE__URL=...` -> `database.url = ...`
    /// - `BJJ_ELITE__PROGRESSION__STREAK_POLICY=frozen`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BJJ_ELITE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.progression.validate()?;
        Ok(())
    }

    /// Production deployments log JSON lines
    pub fn json_logs(&self) -> bool {
        self.server.json_logs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::progression::StreakPolicy;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "BJJ_ELITE__SERVER__PORT",
        "BJJ_ELITE__SERVER__ENVIRONMENT",
        "BJJ_ELITE__DATABASE__URL",
        "BJJ_ELITE__DATABASE__SEED_DEFAULTS",
        "BJJ_ELITE__PROGRESSION__STREAK_POLICY",
        "BJJ_ELITE__PROGRESSION__HISTORY_LIMIT",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.url, "sqlite://bjj_elite.db");
        assert_eq!(config.progression.streak_policy, StreakPolicy::ConsecutiveDays);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BJJ_ELITE__SERVER__PORT", "8081");
        env::set_var("BJJ_ELITE__DATABASE__URL", "sqlite::memory:");
        env::set_var("BJJ_ELITE__DATABASE__SEED_DEFAULTS", "false");
        env::set_var("BJJ_ELITE__PROGRESSION__STREAK_POLICY", "frozen");
        env::set_var("BJJ_ELITE__PROGRESSION__HISTORY_LIMIT", "20");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.database.url, "sqlite::memory:");
        assert!(!config.database.seed_defaults);
        assert_eq!(config.progression.streak_policy, StreakPolicy::Frozen);
        assert_eq!(config.progression.history_limit, 20);
    }

    #[test]
    fn test_production_environment_enables_json_logs() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BJJ_ELITE__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().json_logs());
    }

    #[test]
    fn test_validate_rejects_bad_history_limit() {
        let mut config = AppConfig::default();
        config.progression.history_limit = 100;
        assert!(config.validate().is_err());
    }
}
