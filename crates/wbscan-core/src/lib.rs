pub mod app_config;
pub mod catalog;
pub mod config;
pub mod products;

pub use app_config::{AppConfig, DatabaseConfig};
pub use catalog::{CatalogTree, CategoryNode, CategoryRecord};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{ProductRecord, ScrapeFilter};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
