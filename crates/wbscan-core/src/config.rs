use crate::app_config::{AppConfig, DatabaseConfig};
use crate::ConfigError;

pub const DEFAULT_CATALOG_URL: &str =
    "https://static-basket-01.wbbasket.ru/vol0/data/main-menu-ru-ru-v3.json";
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://catalog.wb.ru";
pub const DEFAULT_SITE_ORIGIN: &str = "https://www.wildberries.ru";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/115.0";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let database = build_database_config(&lookup)?;
    let log_level = or_default("WBSCAN_LOG_LEVEL", "info");

    let db_max_connections = parse_u32("WBSCAN_DB_MAX_CONNECTIONS", "1")?;
    let db_min_connections = parse_u32("WBSCAN_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("WBSCAN_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    let catalog_url = or_default("WBSCAN_CATALOG_URL", DEFAULT_CATALOG_URL);
    let search_base_url = or_default("WBSCAN_SEARCH_BASE_URL", DEFAULT_SEARCH_BASE_URL);
    let site_origin = or_default("WBSCAN_SITE_ORIGIN", DEFAULT_SITE_ORIGIN);
    let max_pages = parse_u32("WBSCAN_MAX_PAGES", "50")?;

    let scraper_request_timeout_secs = parse_u64("WBSCAN_SCRAPER_REQUEST_TIMEOUT_SECS", "30")?;
    let scraper_user_agent = or_default("WBSCAN_SCRAPER_USER_AGENT", DEFAULT_USER_AGENT);
    let scraper_max_attempts = parse_u32("WBSCAN_SCRAPER_MAX_ATTEMPTS", "5")?;
    let scraper_retry_delay_ms = parse_u64("WBSCAN_SCRAPER_RETRY_DELAY_MS", "1000")?;

    if scraper_max_attempts == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "WBSCAN_SCRAPER_MAX_ATTEMPTS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        database,
        log_level,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
        catalog_url,
        search_base_url,
        site_origin,
        max_pages,
        scraper_request_timeout_secs,
        scraper_user_agent,
        scraper_max_attempts,
        scraper_retry_delay_ms,
    })
}

/// `DATABASE_URL` wins when set; otherwise every `DB_*` part except the port
/// is required.
fn build_database_config<F>(lookup: &F) -> Result<DatabaseConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    if let Ok(url) = lookup("DATABASE_URL") {
        return Ok(DatabaseConfig::Url(url));
    }

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let host = require("DB_HOST")?;
    let port = match lookup("DB_PORT") {
        Ok(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
            var: "DB_PORT".to_string(),
            reason: e.to_string(),
        })?,
        Err(_) => 5432,
    };
    let name = require("DB_NAME")?;
    let user = require("DB_USER")?;
    let password = require("DB_PASSWORD")?;

    Ok(DatabaseConfig::Parts {
        host,
        port,
        name,
        user,
        password,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
