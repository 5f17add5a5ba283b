//! The `report` command: aggregate statistics over stored products.

use rust_decimal::Decimal;
use wbscan_db::AnalyticsReport;

/// Loads the analytics report and prints it to stdout.
///
/// # Errors
///
/// Returns an error if any aggregate query fails.
pub(crate) async fn run_report(pool: &sqlx::PgPool, top_brands: i64) -> anyhow::Result<()> {
    let report = wbscan_db::load_report(pool, top_brands).await?;
    print!("{}", format_report(&report));
    Ok(())
}

fn fmt_decimal(value: Option<Decimal>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.round_dp(2).to_string())
}

/// Renders the report as plain-text tables.
pub(crate) fn format_report(report: &AnalyticsReport) -> String {
    let average_discount = report
        .average_discount
        .map_or_else(|| "-".to_string(), |d| format!("{}%", d.round_dp(2)));

    let mut lines = vec![
        format!("Products stored: {}", report.total_products),
        format!("Average price:   {}", fmt_decimal(report.average_price)),
        format!("Average discount: {average_discount}"),
        String::new(),
        format!("{:<32}PRODUCTS", "BRAND"),
    ];
    if report.top_brands.is_empty() {
        lines.push("(no branded products)".to_string());
    }
    lines.extend(
        report
            .top_brands
            .iter()
            .map(|brand| format!("{:<32}{}", brand.brand_name, brand.product_count)),
    );

    lines.push(String::new());
    lines.push(format!("{:<12}PRODUCTS", "PRICE"));
    lines.extend(
        report
            .price_distribution
            .iter()
            .map(|bucket| format!("{:<12}{}", bucket.price, bucket.product_count)),
    );

    lines.push(String::new());
    lines.push(format!("{:<12}PRODUCTS", "RATING"));
    lines.extend(
        report
            .rating_distribution
            .iter()
            .map(|bucket| format!("{:<12}{}", bucket.rating, bucket.product_count)),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
