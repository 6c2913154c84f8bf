//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Database location
//!
//! ```bash
//! # Either a full SQLx URL
//! export DATABASE_URL="sqlite://./data/aliases.db"
//! # or just a file path
//! export STORAGE_PATH="./data/aliases.db"
//! ```
//!
//! If `DATABASE_URL` is not set, it is built from `STORAGE_PATH`
//! (default: `storage.db`).
//!
//! ## Required Variables
//!
//! - `HTTP_USER`, `HTTP_PASSWORD` - Basic auth credentials for `/url` routes
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `HTTP_TIMEOUT_SECONDS` - Per-request timeout (default: 4)
//! - `ALIAS_LENGTH` - Length of generated aliases (default: 6)
//! - `ALIAS_MAX_ATTEMPTS` - Create attempts for a generated alias (default: 10)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 10)
//! - `DB_CONNECT_TIMEOUT` - Connection acquire / busy timeout in seconds (default: 30)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

use crate::application::services::AliasPolicy;
use crate::application::services::shortening_service::DEFAULT_MAX_ATTEMPTS;
use crate::utils::alias_generator::DEFAULT_ALIAS_LENGTH;

const MAX_ALIAS_LENGTH: usize = 64;
const MAX_ALIAS_ATTEMPTS: usize = 100;

/// Database location and pool settings.
///
/// Split from [`Config`] so tools that only touch the database (the admin
/// CLI) can load it without the HTTP credentials.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 10).
    pub max_connections: u32,
    /// Timeout for acquiring a connection, also used as SQLite busy timeout
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub connect_timeout: u64,
}

impl DatabaseConfig {
    /// Loads database settings from environment variables.
    pub fn from_env() -> Self {
        Self {
            url: Self::load_url(),
            max_connections: parse_or("DB_MAX_CONNECTIONS", 10),
            connect_timeout: parse_or("DB_CONNECT_TIMEOUT", 30),
        }
    }

    /// Loads database URL with fallback to a plain file path.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. `sqlite://` + `STORAGE_PATH` (default `storage.db`)
    fn load_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let path = env::var("STORAGE_PATH").unwrap_or_else(|_| "storage.db".to_string());
        format!("sqlite://{}", path)
    }

    /// Validates the database settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not a SQLite URL or a pool setting is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.url.starts_with("sqlite:") {
            anyhow::bail!("DATABASE_URL must start with 'sqlite:', got '{}'", self.url);
        }

        if self.max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }
}

/// Policy for aliases generated when the caller supplies none.
///
/// Like [`DatabaseConfig`], loadable on its own so the admin CLI creates
/// aliases under the same policy as the HTTP server.
#[derive(Debug, Clone)]
pub struct AliasConfig {
    /// Length of generated aliases (`ALIAS_LENGTH`, default: 6).
    pub length: usize,
    /// Total create attempts for a generated alias before the collision is
    /// reported to the caller (`ALIAS_MAX_ATTEMPTS`, default: 10).
    pub max_attempts: usize,
}

impl AliasConfig {
    /// Loads alias settings from environment variables.
    pub fn from_env() -> Self {
        Self {
            length: parse_or("ALIAS_LENGTH", DEFAULT_ALIAS_LENGTH),
            max_attempts: parse_or("ALIAS_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS),
        }
    }

    /// Validates the alias settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the length or the attempt count is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 || self.length > MAX_ALIAS_LENGTH {
            anyhow::bail!(
                "ALIAS_LENGTH must be between 1 and {}, got {}",
                MAX_ALIAS_LENGTH,
                self.length
            );
        }

        if self.max_attempts == 0 || self.max_attempts > MAX_ALIAS_ATTEMPTS {
            anyhow::bail!(
                "ALIAS_MAX_ATTEMPTS must be between 1 and {}, got {}",
                MAX_ALIAS_ATTEMPTS,
                self.max_attempts
            );
        }

        Ok(())
    }

    /// Alias generation policy handed to the shortening service.
    pub fn alias_policy(&self) -> AliasPolicy {
        AliasPolicy {
            length: self.length,
            max_attempts: self.max_attempts,
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Basic auth user for the protected `/url` routes.
    pub http_user: String,
    /// Basic auth password for the protected `/url` routes.
    pub http_password: String,
    /// Requests running longer than this are answered with `408`.
    pub request_timeout_seconds: u64,
    pub alias: AliasConfig,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the Basic auth credentials are missing.
    pub fn from_env() -> Result<Self> {
        let database = DatabaseConfig::from_env();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let http_user = env::var("HTTP_USER").context("HTTP_USER must be set")?;
        let http_password = env::var("HTTP_PASSWORD").context("HTTP_PASSWORD must be set")?;

        Ok(Self {
            database,
            listen_addr,
            log_level,
            log_format,
            http_user,
            http_password,
            request_timeout_seconds: parse_or("HTTP_TIMEOUT_SECONDS", 4),
            alias: AliasConfig::from_env(),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range or malformed.
    pub fn validate(&self) -> Result<()> {
        self.database.validate()?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.http_user.is_empty() || self.http_password.is_empty() {
            anyhow::bail!("HTTP_USER and HTTP_PASSWORD must not be empty");
        }

        if self.request_timeout_seconds == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECONDS must be greater than 0");
        }

        self.alias.validate()?;

        Ok(())
    }

    /// Alias generation policy handed to the shortening service.
    pub fn alias_policy(&self) -> AliasPolicy {
        self.alias.alias_policy()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database.url);
        tracing::info!("  Basic auth user: {}", self.http_user);
        tracing::info!("  Request timeout: {}s", self.request_timeout_seconds);
        tracing::info!(
            "  Generated aliases: {} chars, {} attempts",
            self.alias.length,
            self.alias.max_attempts
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            database: DatabaseConfig {
                url: "sqlite://storage.db".to_string(),
                max_connections: 10,
                connect_timeout: 30,
            },
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            http_user: "admin".to_string(),
            http_password: "secret".to_string(),
            request_timeout_seconds: 4,
            alias: AliasConfig {
                length: 6,
                max_attempts: 10,
            },
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:8080".to_string();

        config.database.url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());

        config.database.url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_alias_settings_validation() {
        let mut config = valid_config();

        config.alias.length = 0;
        assert!(config.validate().is_err());

        config.alias.length = 65;
        assert!(config.validate().is_err());

        config.alias.length = 8;
        config.alias.max_attempts = 0;
        assert!(config.validate().is_err());

        config.alias.max_attempts = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_alias_config_loads_without_credentials() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("HTTP_USER");
            env::remove_var("HTTP_PASSWORD");
            env::set_var("ALIAS_LENGTH", "10");
            env::set_var("ALIAS_MAX_ATTEMPTS", "3");
        }

        let alias = AliasConfig::from_env();

        assert!(alias.validate().is_ok());
        assert_eq!(alias.alias_policy().length, 10);
        assert_eq!(alias.alias_policy().max_attempts, 3);

        unsafe {
            env::set_var("ALIAS_LENGTH", "0");
        }

        assert!(AliasConfig::from_env().validate().is_err());

        unsafe {
            env::remove_var("ALIAS_LENGTH");
            env::remove_var("ALIAS_MAX_ATTEMPTS");
        }
    }

    #[test]
    fn test_pool_settings_validation() {
        let mut config = valid_config();

        config.database.max_connections = 0;
        assert!(config.validate().is_err());

        config.database.max_connections = 1;
        config.database.connect_timeout = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let mut config = valid_config();
        config.http_password = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_alias_policy_from_config() {
        let mut config = valid_config();
        config.alias.length = 9;
        config.alias.max_attempts = 3;

        let policy = config.alias_policy();
        assert_eq!(policy.length, 9);
        assert_eq!(policy.max_attempts, 3);
    }

    #[test]
    #[serial]
    fn test_load_database_url_from_storage_path() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_URL");
            env::set_var("STORAGE_PATH", "./data/aliases.db");
        }

        assert_eq!(DatabaseConfig::load_url(), "sqlite://./data/aliases.db");

        unsafe {
            env::remove_var("STORAGE_PATH");
        }

        assert_eq!(DatabaseConfig::load_url(), "sqlite://storage.db");
    }

    #[test]
    #[serial]
    fn test_database_url_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DATABASE_URL", "sqlite://from-url.db");
            env::set_var("STORAGE_PATH", "from-path.db");
        }

        let url = DatabaseConfig::load_url();

        assert!(url.contains("from-url"));
        assert!(!url.contains("from-path"));

        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("STORAGE_PATH");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_and_overrides() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("HTTP_USER", "admin");
            env::set_var("HTTP_PASSWORD", "secret");
            env::set_var("ALIAS_LENGTH", "8");
            env::set_var("ALIAS_MAX_ATTEMPTS", "not-a-number");
            env::remove_var("LISTEN");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.alias.length, 8);
        assert_eq!(config.alias.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.listen_addr, "0.0.0.0:8080");

        unsafe {
            env::remove_var("HTTP_USER");
            env::remove_var("HTTP_PASSWORD");
            env::remove_var("ALIAS_LENGTH");
            env::remove_var("ALIAS_MAX_ATTEMPTS");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_credentials() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("HTTP_USER");
            env::remove_var("HTTP_PASSWORD");
        }

        assert!(Config::from_env().is_err());
    }
}
