/// A product extracted from one search page, normalized for storage.
///
/// Prices are whole display-currency units: the source sends hundredths and
/// the extractor floor-divides by 100.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    /// Marketplace article number; the natural key of the `products` table.
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<i64>,
    pub sale_price: Option<i64>,
    /// Bonus points granted for leaving a review (`feedbackPoints`).
    pub cashback: Option<i64>,
    pub sale_discount_percent: Option<i32>,
    pub brand_name: Option<String>,
    pub rating: Option<f64>,
    pub supplier_name: Option<String>,
    pub supplier_rating: Option<f64>,
    pub feedback_count: Option<i64>,
    pub review_rating: Option<f64>,
    pub promo_text_card: Option<String>,
    pub promo_text_cat: Option<String>,
    pub detail_link: String,
}

/// Price and discount filters applied to every page request of a run.
///
/// Bounds are whole currency units; the scraper converts them to the
/// endpoint's hundredths representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeFilter {
    pub low_price: u64,
    pub top_price: u64,
    pub discount: Option<u32>,
}

impl Default for ScrapeFilter {
    fn default() -> Self {
        Self {
            low_price: 1,
            top_price: 1_000_000,
            discount: None,
        }
    }
}
