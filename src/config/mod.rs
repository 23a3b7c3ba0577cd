//! Service configuration, read from `ORGANIZE_EXAM__*` environment variables.
//!
//! Nested keys use `__`, so `ORGANIZE_EXAM__SERVER__PORT=3000` sets
//! `server.port`. A `.env` file in the working directory is read first when
//! present. Every key has a default except `database.url`; leaving the whole
//! `database` section out selects the in-memory store.

mod database;
mod server;

pub use database::DatabaseConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;
use thiserror::Error;

/// The environment could not be turned into an [`AppConfig`].
#[derive(Debug, Error)]
#[error("Could not read configuration: {0}")]
pub struct ConfigError(#[from] config::ConfigError);

/// A configuration value was read but is not usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("server.port must be non-zero")]
    ZeroPort,

    #[error("server.host {host:?} with port {port} is not a socket address")]
    BadBindAddress { host: String, port: u16 },

    #[error("server.request_timeout_secs must be between 1 and 300, got {0}")]
    RequestTimeoutOutOfRange(u64),

    #[error("database.url must start with postgres:// or postgresql://")]
    NotPostgresUrl,

    #[error("database pool bounds are invalid: min {min}, max {max}")]
    PoolBounds { min: u32, max: u32 },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let source = config::Environment::with_prefix("ORGANIZE_EXAM")
            .prefix_separator("__")
            .separator("__");

        Ok(config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database
            .as_ref()
            .map_or(Ok(()), DatabaseConfig::validate)
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
