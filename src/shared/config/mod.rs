//! Application configuration module
//!
//! Provides the process-wide configuration for the SSO service. The
//! configuration is read from a TOML file whose path comes from the
//! `--config` flag or the `CONFIG_PATH` environment variable.
//!
//! # Example
//!
//! ```toml
//! env = "local"
//! storage_path = "./storage/sso.db"
//! token_ttl_secs = 3600
//!
//! [http]
//! port = 44044
//! timeout_secs = 10
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 44044;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Deployment environment, selects the logging format and level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    /// Human-readable logs at DEBUG
    #[default]
    Local,
    /// JSON logs at DEBUG
    Dev,
    /// JSON logs at INFO
    Prod,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl HttpConfig {
    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    #[serde(default)]
    pub env: Env,
    /// Path to the SQLite database file
    pub storage_path: PathBuf,
    /// Lifetime of issued session tokens, in seconds
    pub token_ttl_secs: u64,
    /// bcrypt cost factor used when hashing new passwords
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// * `ConfigError::NotFound` - if the file does not exist
    /// * `ConfigError::Read` - if the file cannot be read
    /// * `ConfigError::Parse` - if the file is not valid TOML for this schema
    /// * `ConfigError::InvalidValue` - if a value is out of range
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&raw)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingValue("storage_path"));
        }
        if self.token_ttl_secs == 0 {
            return Err(ConfigError::invalid("token_ttl_secs", "must be greater than zero"));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::invalid("bcrypt_cost", "must be between 4 and 31"));
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::invalid("http.timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }

    /// Token lifetime as a `Duration`
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    env: Option<Env>,
    storage_path: Option<PathBuf>,
    token_ttl: Option<Duration>,
    bcrypt_cost: Option<u32>,
    http: Option<HttpConfig>,
}

impl AppConfigBuilder {
    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn http(mut self, http: HttpConfig) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            env: self.env.unwrap_or_default(),
            storage_path: self
                .storage_path
                .ok_or(ConfigError::MissingValue("storage_path"))?,
            token_ttl_secs: self
                .token_ttl
                .ok_or(ConfigError::MissingValue("token_ttl_secs"))?
                .as_secs(),
            bcrypt_cost: self.bcrypt_cost.unwrap_or_else(default_bcrypt_cost),
            http: self.http.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config path is empty: pass --config or set CONFIG_PATH")]
    MissingPath,
    #[error("config file does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for '{field}': {message}")]
    InvalidValue {
        field: &'static str,
        message: &'static str,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, message: &'static str) -> Self {
        Self::InvalidValue { field, message }
    }
}
