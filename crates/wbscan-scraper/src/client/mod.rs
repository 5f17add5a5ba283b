//! HTTP client for the marketplace catalog menu and search endpoints.

mod fetch_all;

use std::time::Duration;

use reqwest::Client;
use wbscan_core::config::{DEFAULT_CATALOG_URL, DEFAULT_SEARCH_BASE_URL};
use wbscan_core::{CatalogTree, ScrapeFilter};

use crate::error::ScraperError;
use crate::rate_limit::retry_fixed;
use crate::types::SearchResponse;

/// Fixed search parameters sent with every page request.
const SEARCH_FIXED_PARAMS: &str = "appType=1&curr=rub&dest=-1257786&locale=ru";

/// HTTP client for the category menu and the paginated search endpoint.
///
/// The catalog menu is fetched once with no retry. Search pages are retried
/// up to `max_attempts` times in total with a constant `retry_delay`.
pub struct CatalogClient {
    pub(super) client: Client,
    pub(super) catalog_url: String,
    pub(super) search_base_url: String,
    /// Total attempts per search page, including the first.
    pub(super) max_attempts: u32,
    pub(super) retry_delay: Duration,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with configured timeout, `User-Agent`, and
    /// retry policy, pointed at the production endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_attempts: u32,
        retry_delay_ms: u64,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            catalog_url: DEFAULT_CATALOG_URL.to_owned(),
            search_base_url: DEFAULT_SEARCH_BASE_URL.to_owned(),
            max_attempts,
            retry_delay: Duration::from_millis(retry_delay_ms),
        })
    }

    /// Overrides the catalog menu URL and the search endpoint base.
    #[must_use]
    pub fn with_endpoints(mut self, catalog_url: &str, search_base_url: &str) -> Self {
        catalog_url.clone_into(&mut self.catalog_url);
        search_base_url.clone_into(&mut self.search_base_url);
        self
    }

    /// Fetches the full category menu.
    ///
    /// Single request, no retry: if the menu cannot be fetched nothing else
    /// in a run can proceed.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`]: network or TLS failure.
    /// - [`ScraperError::UnexpectedStatus`]: any non-2xx status.
    /// - [`ScraperError::Deserialize`]: body is not a category tree.
    pub async fn fetch_catalog(&self) -> Result<CatalogTree, ScraperError> {
        let url = &self.catalog_url;
        tracing::debug!(url = %url, "fetching catalog menu");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "*/*")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.clone(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<CatalogTree>(&body).map_err(|e| ScraperError::Deserialize {
            context: format!("catalog menu from {url}"),
            source: e,
        })
    }

    /// Fetches one 1-based page of search results for a category, retrying
    /// every failure with a fixed delay.
    ///
    /// # Errors
    ///
    /// Returns the last error once all attempts are used up, or
    /// [`ScraperError::InvalidUrl`] (not retried) if the search base URL is
    /// malformed.
    pub async fn fetch_search_page(
        &self,
        page: u32,
        shard: &str,
        query: &str,
        filter: &ScrapeFilter,
    ) -> Result<SearchResponse, ScraperError> {
        let url = Self::search_url(&self.search_base_url, shard, query, page, filter)?;

        retry_fixed(self.max_attempts, self.retry_delay, || {
            let url = url.clone();
            async move {
                tracing::debug!(url = %url, "fetching search page");
                let response = self.client.get(&url).send().await?;
                let status = response.status();

                if !status.is_success() {
                    return Err(ScraperError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                serde_json::from_str::<SearchResponse>(&body).map_err(|e| {
                    ScraperError::Deserialize {
                        context: format!("search page {page} from {url}"),
                        source: e,
                    }
                })
            }
        })
        .await
    }

    /// Builds the search URL for one page.
    ///
    /// Price bounds are converted to hundredths. The category `query` is
    /// already URL-encoded by the menu endpoint and is appended verbatim. The
    /// `discount` parameter is omitted when no discount filter is set.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] if `search_base_url` and `shard`
    /// do not form a valid URL.
    fn search_url(
        search_base_url: &str,
        shard: &str,
        query: &str,
        page: u32,
        filter: &ScrapeFilter,
    ) -> Result<String, ScraperError> {
        let base = format!(
            "{}/catalog/{shard}/catalog",
            search_base_url.trim_end_matches('/')
        );
        reqwest::Url::parse(&base).map_err(|e| ScraperError::InvalidUrl {
            url: base.clone(),
            reason: e.to_string(),
        })?;

        let low = filter.low_price.saturating_mul(100);
        let top = filter.top_price.saturating_mul(100);
        let mut url = format!(
            "{base}?{SEARCH_FIXED_PARAMS}&page={page}&priceU={low};{top}&sort=popular&spp=0"
        );

        let query = query.trim_start_matches(['?', '&']);
        if !query.is_empty() {
            url.push('&');
            url.push_str(query);
        }
        if let Some(discount) = filter.discount {
            url.push_str(&format!("&discount={discount}"));
        }

        Ok(url)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
