use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use thiserror::Error;
use wbscan_core::{AppConfig, DatabaseConfig};

const DEFAULT_MAX_CONNECTIONS: u32 = 1;
const DEFAULT_MIN_CONNECTIONS: u32 = 1;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 10;

// Path relative to crates/wbscan-db/Cargo.toml; resolves to <workspace-root>/migrations/
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: DEFAULT_MIN_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

impl PoolConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            max_connections: config.db_max_connections,
            min_connections: config.db_min_connections,
            acquire_timeout_secs: config.db_acquire_timeout_secs,
        }
    }
}

#[derive(Debug, Error)]
pub enum DbError {
    #[error("invalid DATABASE_URL: {0}")]
    InvalidDatabaseUrl(#[source] sqlx::Error),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Builds connect options from either a URL or individual parts.
///
/// # Errors
///
/// Returns [`DbError::InvalidDatabaseUrl`] if the URL cannot be parsed.
pub fn connect_options(database: &DatabaseConfig) -> Result<PgConnectOptions, DbError> {
    match database {
        DatabaseConfig::Url(url) => {
            PgConnectOptions::from_str(url).map_err(DbError::InvalidDatabaseUrl)
        }
        DatabaseConfig::Parts {
            host,
            port,
            name,
            user,
            password,
        } => Ok(PgConnectOptions::new()
            .host(host)
            .port(*port)
            .database(name)
            .username(user)
            .password(password)),
    }
}

/// Connect to a Postgres pool using explicit settings.
///
/// The returned pool is the run's single store handle; callers close it with
/// [`PgPool::close`] once the run is over.
///
/// # Errors
///
/// Returns [`DbError`] if the options are invalid or the connection cannot be
/// established.
pub async fn connect_pool(database: &DatabaseConfig, config: PoolConfig) -> Result<PgPool, DbError> {
    let options = connect_options(database)?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Run all pending migrations against the pool.
///
/// Returns the number of migrations that were applied.
///
/// # Errors
///
/// Returns [`sqlx::migrate::MigrateError`] if any migration fails.
pub async fn run_migrations(pool: &PgPool) -> Result<usize, sqlx::migrate::MigrateError> {
    // The _sqlx_migrations table may not exist yet on a fresh database; treat
    // absence as zero applied.
    let applied_before: i64 =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM _sqlx_migrations WHERE success = true")
            .fetch_one(pool)
            .await
            .unwrap_or(0);

    MIGRATOR.run(pool).await?;

    let applied_after: i64 =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM _sqlx_migrations WHERE success = true")
            .fetch_one(pool)
            .await
            .unwrap_or(0);

    let delta = (applied_after - applied_before).max(0);
    Ok(usize::try_from(delta).unwrap_or(0))
}

/// Send a `SELECT 1` to verify the pool has a live connection.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}

pub mod analytics;
pub mod brands;
pub mod products;
pub mod suppliers;
pub mod writer;

pub use analytics::{load_report, AnalyticsReport, BrandProductCount, PriceBucket, RatingBucket};
pub use brands::{get_brand_by_name, get_or_create_brand, BrandRow};
pub use products::{get_product, insert_product_if_absent, ProductRow};
pub use suppliers::{get_or_create_supplier, get_supplier_by_name, SupplierRow};
pub use writer::{save_products, SaveSummary};
