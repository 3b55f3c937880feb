use anyhow::Result;

use cartwheel_core::dashboard::BreakdownRow;

use crate::DuckDbStore;

/// Summed purchase revenue per day-of-month, ascending by day.
pub async fn daily_sales_inner(db: &DuckDbStore) -> Result<Vec<BreakdownRow>> {
    breakdown_query(
        db,
        r#"
        SELECT day, COALESCE(SUM(price), 0) AS revenue
        FROM events
        WHERE event_type = 'purchase'
        GROUP BY day
        ORDER BY day ASC
        "#,
    )
    .await
}

/// View-event count per hour-of-day, ascending by hour.
///
/// Only hours that actually saw views appear; the rendering side decides
/// whether to zero-fill the remaining buckets.
pub async fn visitors_by_hour_inner(db: &DuckDbStore) -> Result<Vec<BreakdownRow>> {
    breakdown_query(
        db,
        r#"
        SELECT hour, CAST(COUNT(*) AS DOUBLE) AS visitors
        FROM events
        WHERE event_type = 'view'
        GROUP BY hour
        ORDER BY hour ASC
        "#,
    )
    .await
}

/// Summed purchase revenue per ISO weekday index (0 = Monday), ascending.
pub async fn revenue_by_weekday_inner(db: &DuckDbStore) -> Result<Vec<BreakdownRow>> {
    breakdown_query(
        db,
        r#"
        SELECT weekday, COALESCE(SUM(price), 0) AS revenue
        FROM events
        WHERE event_type = 'purchase'
        GROUP BY weekday
        ORDER BY weekday ASC
        "#,
    )
    .await
}

async fn breakdown_query(db: &DuckDbStore, sql: &str) -> Result<Vec<BreakdownRow>> {
    let conn = db.conn.lock().await;
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], |row| {
        Ok(BreakdownRow {
            bucket: row.get::<_, u32>(0)?,
            value: row.get(1)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

impl DuckDbStore {
    /// Daily sales trend over purchase rows.
    pub async fn daily_sales(&self) -> Result<Vec<BreakdownRow>> {
        daily_sales_inner(self).await
    }

    /// Visitor counts by hour over view rows.
    pub async fn visitors_by_hour(&self) -> Result<Vec<BreakdownRow>> {
        visitors_by_hour_inner(self).await
    }

    /// Revenue by weekday over purchase rows.
    pub async fn revenue_by_weekday(&self) -> Result<Vec<BreakdownRow>> {
        revenue_by_weekday_inner(self).await
    }
}
