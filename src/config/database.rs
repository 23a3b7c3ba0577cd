//! PostgreSQL pool settings.

use std::time::Duration;

use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;

use super::ValidationError;

const POOL_CEILING: u32 = 100;

/// `ORGANIZE_EXAM__DATABASE__*`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub min_connections: u32,
    pub max_connections: u32,
    /// Longest wait for a pooled connection before the store reports unavailable.
    pub acquire_timeout_secs: u64,
    /// Apply the embedded migrations at startup.
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            min_connections: 1,
            max_connections: 10,
            acquire_timeout_secs: 5,
            run_migrations: false,
        }
    }
}

impl DatabaseConfig {
    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .min_connections(self.min_connections)
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let is_postgres = ["postgres://", "postgresql://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme));
        if !is_postgres {
            return Err(ValidationError::NotPostgresUrl);
        }

        let (min, max) = (self.min_connections, self.max_connections);
        if max == 0 || min > max || max > POOL_CEILING {
            return Err(ValidationError::PoolBounds { min, max });
        }
        Ok(())
    }
}
