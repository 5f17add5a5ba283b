//! Multi-page category scrape for `CatalogClient`.

use wbscan_core::{CategoryRecord, ProductRecord, ScrapeFilter};

use crate::error::ScraperError;
use crate::normalize::extract_products;

use super::CatalogClient;

impl CatalogClient {
    /// Scrapes pages `1..=max_pages` of a resolved category, one after the
    /// other, and returns every extracted product in page order.
    ///
    /// The page count is fixed: pages past the end of the category return no
    /// products and simply contribute nothing. Duplicates across pages are
    /// kept; deduplication happens on insert.
    ///
    /// **All-or-nothing semantics**: if any page exhausts its retries, the
    /// products gathered from earlier pages are discarded and the error is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::MissingRouting`] if the category has no shard
    /// or query, and propagates any error from [`Self::fetch_search_page`].
    pub async fn scrape_category(
        &self,
        category: &CategoryRecord,
        filter: &ScrapeFilter,
        max_pages: u32,
    ) -> Result<Vec<ProductRecord>, ScraperError> {
        let shard = category
            .shard
            .as_deref()
            .ok_or_else(|| ScraperError::MissingRouting {
                name: category.name.clone(),
                field: "shard",
            })?;
        let query = category
            .query
            .as_deref()
            .ok_or_else(|| ScraperError::MissingRouting {
                name: category.name.clone(),
                field: "query",
            })?;

        let mut all_products: Vec<ProductRecord> = Vec::new();

        for page in 1..=max_pages {
            let response = self.fetch_search_page(page, shard, query, filter).await?;
            let products = extract_products(response);
            tracing::info!(
                category = %category.name,
                page,
                products = products.len(),
                "scraped search page"
            );
            all_products.extend(products);
        }

        Ok(all_products)
    }
}
