//! Database operations for the `brands` table.

use sqlx::PgConnection;

use crate::DbError;

/// A row from the `brands` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BrandRow {
    pub brand_id: i64,
    pub brand_name: String,
}

/// Returns the id of the brand named `name`, inserting it first if absent.
///
/// A single statement: the insert is conflict-ignored on `brand_name` and the
/// union falls through to the existing row when nothing was inserted. Brands
/// are never updated.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_or_create_brand(conn: &mut PgConnection, name: &str) -> Result<i64, DbError> {
    let id = sqlx::query_scalar::<_, i64>(
        "WITH inserted AS ( \
             INSERT INTO brands (brand_name) VALUES ($1) \
             ON CONFLICT (brand_name) DO NOTHING \
             RETURNING brand_id \
         ) \
         SELECT brand_id FROM inserted \
         UNION ALL \
         SELECT brand_id FROM brands WHERE brand_name = $1 \
         LIMIT 1",
    )
    .bind(name)
    .fetch_one(&mut *conn)
    .await?;

    Ok(id)
}

/// Returns the brand named `name`, or `None` if it has never been seen.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_brand_by_name(
    conn: &mut PgConnection,
    name: &str,
) -> Result<Option<BrandRow>, DbError> {
    let row = sqlx::query_as::<_, BrandRow>(
        "SELECT brand_id, brand_name FROM brands WHERE brand_name = $1",
    )
    .bind(name)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row)
}
