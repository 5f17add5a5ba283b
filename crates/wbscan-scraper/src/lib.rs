pub mod catalog;
pub mod client;
pub mod error;
pub mod normalize;
mod rate_limit;
pub mod types;

pub use catalog::{flatten_catalog, resolve_category};
pub use client::CatalogClient;
pub use error::ScraperError;
pub use normalize::{extract_products, normalize_product};
pub use types::{SearchData, SearchResponse, WbProduct};
