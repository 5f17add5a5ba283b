//! Response types for the catalog search endpoint
//! (`GET /catalog/{shard}/catalog?...`).
//!
//! ## Observed shape
//!
//! ```text
//! { "state": 0, "data": { "products": [ { "id": 12345678, "priceU": 150000, ... } ] } }
//! ```
//!
//! Prices (`priceU`, `salePriceU`) are integers in hundredths of a rouble.
//! `rating` is an integer star count while `reviewRating` and
//! `supplierRating` are one-decimal floats; all three are modelled as `f64`.
//!
//! Pages past the end of a category come back either as an empty
//! `products` array or with `data` missing entirely. Both deserialize to an
//! empty product list.

use serde::Deserialize;

/// Top-level search response.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: SearchData,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub products: Vec<WbProduct>,
}

/// A single product card as returned by the search endpoint.
///
/// Only `id` is required; every other field is passed through as `None`
/// when absent or `null`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WbProduct {
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    /// List price in hundredths.
    #[serde(default, rename = "priceU")]
    pub price_u: Option<i64>,

    /// Price after discounts, in hundredths.
    #[serde(default, rename = "salePriceU")]
    pub sale_price_u: Option<i64>,

    /// Bonus points for leaving a review.
    #[serde(default)]
    pub feedback_points: Option<i64>,

    /// Discount percent.
    #[serde(default)]
    pub sale: Option<i32>,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub supplier: Option<String>,

    #[serde(default)]
    pub supplier_rating: Option<f64>,

    #[serde(default)]
    pub feedbacks: Option<i64>,

    #[serde(default)]
    pub review_rating: Option<f64>,

    #[serde(default)]
    pub promo_text_card: Option<String>,

    #[serde(default)]
    pub promo_text_cat: Option<String>,
}
