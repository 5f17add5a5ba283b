//! Database operations for the `products` table.

use chrono::{DateTime, Utc};
use sqlx::PgConnection;
use wbscan_core::ProductRecord;

use crate::DbError;

/// A row from the `products` table.
///
/// The camelCase columns are unquoted in the schema, so Postgres reports
/// them lowercased.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<i64>,
    #[sqlx(rename = "salepriceu")]
    pub sale_price: Option<i64>,
    pub cashback: Option<i64>,
    pub sale: Option<i32>,
    pub brand_id: Option<i64>,
    pub rating: Option<f64>,
    pub supplier_id: Option<i64>,
    pub feedbacks: Option<i64>,
    #[sqlx(rename = "reviewrating")]
    pub review_rating: Option<f64>,
    #[sqlx(rename = "promotextcard")]
    pub promo_text_card: Option<String>,
    #[sqlx(rename = "promotextcat")]
    pub promo_text_cat: Option<String>,
    pub link: String,
    pub created_at: DateTime<Utc>,
}

/// Inserts a product unless a row with the same `id` already exists.
///
/// Existing rows are left untouched: price, rating and every other field keep
/// their first-seen values. Returns `true` when a row was inserted.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_product_if_absent(
    conn: &mut PgConnection,
    record: &ProductRecord,
    brand_id: Option<i64>,
    supplier_id: Option<i64>,
) -> Result<bool, DbError> {
    let result = sqlx::query(
        "INSERT INTO products \
             (id, name, price, salePriceU, cashback, sale, brand_id, rating, supplier_id, \
              feedbacks, reviewRating, promoTextCard, promoTextCat, link, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, NOW()) \
         ON CONFLICT (id) DO NOTHING",
    )
    .bind(record.id)
    .bind(&record.name)
    .bind(record.price)
    .bind(record.sale_price)
    .bind(record.cashback)
    .bind(record.sale_discount_percent)
    .bind(brand_id)
    .bind(record.rating)
    .bind(supplier_id)
    .bind(record.feedback_count)
    .bind(record.review_rating)
    .bind(&record.promo_text_card)
    .bind(&record.promo_text_cat)
    .bind(&record.detail_link)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Returns the stored product with article number `id`, if any.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_product(conn: &mut PgConnection, id: i64) -> Result<Option<ProductRow>, DbError> {
    let row = sqlx::query_as::<_, ProductRow>(
        "SELECT id, name, price, salePriceU, cashback, sale, brand_id, rating, supplier_id, \
                feedbacks, reviewRating, promoTextCard, promoTextCat, link, created_at \
         FROM products \
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row)
}
