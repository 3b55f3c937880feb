use anyhow::Result;

use cartwheel_core::dashboard::KpiSummary;

use crate::DuckDbStore;

pub async fn kpi_summary_inner(db: &DuckDbStore) -> Result<KpiSummary> {
    let conn = db.conn.lock().await;

    // SUM over zero rows is NULL in SQL; COALESCE keeps the pipeline
    // boundary at 0 so formatting never receives a null. The AOV division
    // is guarded in KpiSummary::from_totals.
    let mut stmt = conn.prepare(
        r#"
        SELECT
            COUNT(*) AS total_orders,
            COALESCE(SUM(price), 0) AS total_revenue
        FROM events
        WHERE event_type = 'purchase'
        "#,
    )?;
    let (total_orders, total_revenue) = stmt.query_row([], |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, f64>(1)?))
    })?;

    Ok(KpiSummary::from_totals(total_orders, total_revenue))
}

impl DuckDbStore {
    /// Total orders, total revenue and average order value over purchase rows.
    pub async fn kpi_summary(&self) -> Result<KpiSummary> {
        kpi_summary_inner(self).await
    }
}
