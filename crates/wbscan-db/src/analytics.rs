//! Read-only aggregate queries over the stored catalog.

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::DbError;

/// Product count for one brand.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct BrandProductCount {
    pub brand_name: String,
    pub product_count: i64,
}

/// Number of products listed at exactly `price`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PriceBucket {
    pub price: i64,
    pub product_count: i64,
}

/// Number of products with exactly `rating`.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RatingBucket {
    pub rating: f64,
    pub product_count: i64,
}

/// Everything the `report` command prints.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsReport {
    pub total_products: i64,
    pub top_brands: Vec<BrandProductCount>,
    /// `None` when no product has a price.
    pub average_price: Option<Decimal>,
    pub price_distribution: Vec<PriceBucket>,
    pub rating_distribution: Vec<RatingBucket>,
    /// Mean `sale` percent; `None` when no product has one.
    pub average_discount: Option<Decimal>,
}

/// Total number of stored products.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_products(pool: &PgPool) -> Result<i64, DbError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Brands with the most products, largest first. Ties break by name.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn top_brands(pool: &PgPool, limit: i64) -> Result<Vec<BrandProductCount>, DbError> {
    let rows = sqlx::query_as::<_, BrandProductCount>(
        "SELECT b.brand_name, COUNT(p.id) AS product_count \
         FROM products p \
         JOIN brands b ON p.brand_id = b.brand_id \
         GROUP BY b.brand_name \
         ORDER BY product_count DESC, b.brand_name \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Mean list price over products that have one.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn average_price(pool: &PgPool) -> Result<Option<Decimal>, DbError> {
    let avg = sqlx::query_scalar::<_, Option<Decimal>>("SELECT AVG(price) FROM products")
        .fetch_one(pool)
        .await?;
    Ok(avg)
}

/// Product count per distinct list price, ascending by price.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn price_distribution(pool: &PgPool) -> Result<Vec<PriceBucket>, DbError> {
    let rows = sqlx::query_as::<_, PriceBucket>(
        "SELECT price, COUNT(*) AS product_count \
         FROM products \
         WHERE price IS NOT NULL \
         GROUP BY price \
         ORDER BY price",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Product count per distinct rating, ascending by rating.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn rating_distribution(pool: &PgPool) -> Result<Vec<RatingBucket>, DbError> {
    let rows = sqlx::query_as::<_, RatingBucket>(
        "SELECT rating, COUNT(*) AS product_count \
         FROM products \
         WHERE rating IS NOT NULL \
         GROUP BY rating \
         ORDER BY rating",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Mean discount percent over products that have one.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn average_discount(pool: &PgPool) -> Result<Option<Decimal>, DbError> {
    let avg = sqlx::query_scalar::<_, Option<Decimal>>(
        "SELECT AVG(sale) FROM products WHERE sale IS NOT NULL",
    )
    .fetch_one(pool)
    .await?;
    Ok(avg)
}

/// Runs every aggregate query, one after the other.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any query fails.
pub async fn load_report(pool: &PgPool, top_brand_limit: i64) -> Result<AnalyticsReport, DbError> {
    Ok(AnalyticsReport {
        total_products: count_products(pool).await?,
        top_brands: top_brands(pool, top_brand_limit).await?,
        average_price: average_price(pool).await?,
        price_distribution: price_distribution(pool).await?,
        rating_distribution: rating_distribution(pool).await?,
        average_discount: average_discount(pool).await?,
    })
}
