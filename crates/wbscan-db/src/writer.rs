//! Batch persistence of one run's scraped products.

use std::collections::HashSet;

use sqlx::PgPool;
use wbscan_core::ProductRecord;

use crate::brands::get_or_create_brand;
use crate::products::insert_product_if_absent;
use crate::suppliers::get_or_create_supplier;
use crate::DbError;

/// What a [`save_products`] call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveSummary {
    /// Records handed in, duplicates included.
    pub records: usize,
    /// Distinct product ids among those records.
    pub distinct_products: usize,
    /// Rows newly inserted; ids already stored are not counted.
    pub inserted: usize,
}

/// Persists `records` in order inside a single transaction.
///
/// For each record the brand and supplier are resolved with get-or-create
/// (skipped when the name is null), then the product is inserted unless its
/// id is already stored. Nothing is visible to other sessions until the
/// final commit; any error rolls back the whole batch.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any statement or the commit fails.
pub async fn save_products(
    pool: &PgPool,
    records: &[ProductRecord],
) -> Result<SaveSummary, DbError> {
    let mut tx = pool.begin().await?;
    let mut seen: HashSet<i64> = HashSet::with_capacity(records.len());
    let mut inserted = 0usize;

    for record in records {
        let brand_id = match record.brand_name.as_deref() {
            Some(name) => Some(get_or_create_brand(&mut tx, name).await?),
            None => None,
        };
        let supplier_id = match record.supplier_name.as_deref() {
            Some(name) => Some(get_or_create_supplier(&mut tx, name, record.supplier_rating).await?),
            None => None,
        };

        if insert_product_if_absent(&mut tx, record, brand_id, supplier_id).await? {
            inserted += 1;
        }
        seen.insert(record.id);
    }

    tx.commit().await?;

    let summary = SaveSummary {
        records: records.len(),
        distinct_products: seen.len(),
        inserted,
    };
    tracing::info!(
        records = summary.records,
        distinct = summary.distinct_products,
        inserted = summary.inserted,
        "saved product batch"
    );
    Ok(summary)
}
