//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits and lifetimes.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// sqlx never holds more idle connections than this either.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 25;

/// Idle connections and long-lived connections are recycled after this.
pub const DEFAULT_CONNECTION_LIFETIME: Duration = Duration::from_secs(5 * 60);

/// Pool sizing and recycling options
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            idle_timeout: DEFAULT_CONNECTION_LIFETIME,
            max_lifetime: DEFAULT_CONNECTION_LIFETIME,
        }
    }
}

impl PoolConfig {
    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
    }
}

/// Create a PostgreSQL connection pool with default limits.
///
/// Connects eagerly, so an unreachable database fails here rather than on
/// the first request.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let options = DbConfig::from_env()?.connect_options()?;
/// let pool = create_pool(options).await?;
/// ```
pub async fn create_pool(options: PgConnectOptions) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(options, &PoolConfig::default()).await
}

/// Create a PostgreSQL connection pool with custom options.
pub async fn create_pool_with_options(
    options: PgConnectOptions,
    config: &PoolConfig,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        max_connections = config.max_connections,
        idle_timeout_secs = config.idle_timeout.as_secs(),
        max_lifetime_secs = config.max_lifetime.as_secs(),
        "creating connection pool"
    );

    config.pool_options().connect_with(options).await
}
