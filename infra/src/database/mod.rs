//! Database connection management.
//!
//! The pool is created once at process start and injected into the
//! repositories; a process that cannot reach the store must not serve
//! traffic, so pool creation failure is surfaced to `main` as fatal.

pub mod mysql;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;

/// Database connection configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MySQL connection URL
    pub url: String,
    /// Maximum connections in the pool
    pub max_connections: u32,
    /// Timeout for acquiring a connection
    pub connect_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Load the configuration from environment variables.
    ///
    /// `DATABASE_URL` is required; `DATABASE_MAX_CONNECTIONS` and
    /// `DATABASE_CONNECT_TIMEOUT_SECS` have sensible defaults.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        let connect_timeout_secs = std::env::var("DATABASE_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            url,
            max_connections,
            connect_timeout_secs,
        })
    }
}

/// Create the shared connection pool.
///
/// Called once at startup; the returned pool is cloned into each
/// repository (cloning shares the underlying pool).
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    tracing::info!(
        max_connections = config.max_connections,
        "connecting to MySQL"
    );

    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&config.url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Process environment is global; tests touching it must not interleave
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn config_defaults_apply_without_optional_vars() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("DATABASE_URL", "mysql://root@localhost/onesphere");
        std::env::remove_var("DATABASE_MAX_CONNECTIONS");
        std::env::remove_var("DATABASE_CONNECT_TIMEOUT_SECS");

        let config = DatabaseConfig::from_env().unwrap();
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.connect_timeout_secs, 5);

        std::env::remove_var("DATABASE_URL");
    }
}
