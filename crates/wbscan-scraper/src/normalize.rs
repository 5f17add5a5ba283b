//! Normalization from raw search-page products to [`wbscan_core::ProductRecord`].

use wbscan_core::ProductRecord;

use crate::types::{SearchResponse, WbProduct};

/// Base of the public product detail page.
pub const DETAIL_BASE_URL: &str = "https://www.wildberries.ru/catalog";

/// Extracts every product on one search page, preserving page order.
///
/// A page with no products yields an empty `Vec`.
#[must_use]
pub fn extract_products(page: SearchResponse) -> Vec<ProductRecord> {
    page.data
        .products
        .into_iter()
        .map(normalize_product)
        .collect()
}

/// Normalizes one raw product card.
///
/// Hundredths prices are floor-divided by 100; absent fields stay `None`.
#[must_use]
pub fn normalize_product(product: WbProduct) -> ProductRecord {
    ProductRecord {
        id: product.id,
        name: product.name,
        price: product.price_u.map(hundredths_to_units),
        sale_price: product.sale_price_u.map(hundredths_to_units),
        cashback: product.feedback_points,
        sale_discount_percent: product.sale,
        brand_name: product.brand,
        rating: product.rating,
        supplier_name: product.supplier,
        supplier_rating: product.supplier_rating,
        feedback_count: product.feedbacks,
        review_rating: product.review_rating,
        promo_text_card: product.promo_text_card,
        promo_text_cat: product.promo_text_cat,
        detail_link: detail_link(product.id),
    }
}

/// Public product page for an article number.
#[must_use]
pub fn detail_link(id: i64) -> String {
    format!("{DETAIL_BASE_URL}/{id}/detail.aspx?targetUrl=BP")
}

fn hundredths_to_units(value: i64) -> i64 {
    value.div_euclid(100)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
