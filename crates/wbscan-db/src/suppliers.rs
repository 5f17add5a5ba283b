//! Database operations for the `suppliers` table.

use sqlx::PgConnection;

use crate::DbError;

/// A row from the `suppliers` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SupplierRow {
    pub supplier_id: i64,
    pub supplier_name: String,
    /// Rating seen when the supplier was first inserted.
    pub supplier_rating: Option<f64>,
}

/// Returns the id of the supplier named `name`, inserting it with `rating`
/// first if absent.
///
/// `rating` is only written on first insert; an existing supplier keeps the
/// rating it was created with.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_or_create_supplier(
    conn: &mut PgConnection,
    name: &str,
    rating: Option<f64>,
) -> Result<i64, DbError> {
    let id = sqlx::query_scalar::<_, i64>(
        "WITH inserted AS ( \
             INSERT INTO suppliers (supplier_name, supplier_rating) VALUES ($1, $2) \
             ON CONFLICT (supplier_name) DO NOTHING \
             RETURNING supplier_id \
         ) \
         SELECT supplier_id FROM inserted \
         UNION ALL \
         SELECT supplier_id FROM suppliers WHERE supplier_name = $1 \
         LIMIT 1",
    )
    .bind(name)
    .bind(rating)
    .fetch_one(&mut *conn)
    .await?;

    Ok(id)
}

/// Returns the supplier named `name`, or `None` if it has never been seen.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_supplier_by_name(
    conn: &mut PgConnection,
    name: &str,
) -> Result<Option<SupplierRow>, DbError> {
    let row = sqlx::query_as::<_, SupplierRow>(
        "SELECT supplier_id, supplier_name, supplier_rating FROM suppliers WHERE supplier_name = $1",
    )
    .bind(name)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row)
}
