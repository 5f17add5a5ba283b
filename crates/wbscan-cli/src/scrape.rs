//! The `scrape` command: one category from menu lookup to stored rows.
//!
//! Steps run strictly in sequence: fetch the menu, flatten it, resolve the
//! requested URL, scrape the category's pages, then persist the batch. A
//! failure at any step aborts the run before anything is written.

use wbscan_core::{AppConfig, ScrapeFilter};
use wbscan_db::SaveSummary;
use wbscan_scraper::{flatten_catalog, resolve_category, CatalogClient, ScraperError};

/// Builds the price/discount filter for a run.
///
/// # Errors
///
/// Returns an error if `low_price` is above `top_price` or a discount is not
/// a percentage.
pub(crate) fn build_filter(
    low_price: u64,
    top_price: u64,
    discount: Option<u32>,
) -> anyhow::Result<ScrapeFilter> {
    if low_price > top_price {
        anyhow::bail!("--low-price ({low_price}) must not exceed --top-price ({top_price})");
    }
    if let Some(d) = discount {
        if d > 100 {
            anyhow::bail!("--discount must be between 0 and 100, got {d}");
        }
    }
    Ok(ScrapeFilter {
        low_price,
        top_price,
        discount,
    })
}

/// Builds a [`CatalogClient`] from the scraper settings in `config`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub(crate) fn build_catalog_client(config: &AppConfig) -> anyhow::Result<CatalogClient> {
    let client = CatalogClient::new(
        config.scraper_request_timeout_secs,
        &config.scraper_user_agent,
        config.scraper_max_attempts,
        config.scraper_retry_delay_ms,
    )?
    .with_endpoints(&config.catalog_url, &config.search_base_url);
    Ok(client)
}

/// Scrapes the category behind `category_url` and saves its products.
///
/// # Errors
///
/// Returns an error if the menu cannot be fetched, the URL does not match any
/// category, a search page exhausts its retries, or the batch cannot be
/// saved. Nothing is persisted in any of those cases.
pub(crate) async fn run_scrape(
    pool: &sqlx::PgPool,
    config: &AppConfig,
    category_url: &str,
    filter: &ScrapeFilter,
) -> anyhow::Result<SaveSummary> {
    let client = build_catalog_client(config)?;

    let tree = client.fetch_catalog().await?;
    let categories = flatten_catalog(&tree);
    tracing::info!(categories = categories.len(), "catalog menu loaded");

    let category = resolve_category(category_url, &config.site_origin, &categories).ok_or_else(
        || ScraperError::CategoryNotFound {
            url: category_url.to_owned(),
        },
    )?;

    let products = client
        .scrape_category(category, filter, config.max_pages)
        .await?;
    tracing::info!(
        category = %category.name,
        products = products.len(),
        "category scraped"
    );

    let summary = wbscan_db::save_products(pool, &products).await?;
    Ok(summary)
}

/// One-line result printed after a successful run.
pub(crate) fn format_summary(summary: &SaveSummary) -> String {
    format!(
        "saved {} products ({} scraped, {} new)",
        summary.distinct_products, summary.records, summary.inserted
    )
}

#[cfg(test)]
#[path = "scrape_test.rs"]
mod tests;
