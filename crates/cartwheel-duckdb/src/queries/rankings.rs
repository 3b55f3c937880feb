use anyhow::Result;

use cartwheel_core::dashboard::{RankedRow, TOP_N};

use crate::DuckDbStore;

/// Top brands by summed purchase revenue, strictly descending.
///
/// The engine's sort is not stable across runs, so ties are broken by an
/// explicit secondary ascending sort on the brand name. Rows with a NULL
/// brand carry revenue that cannot be attributed and are excluded.
pub async fn top_brands_inner(db: &DuckDbStore) -> Result<Vec<RankedRow>> {
    ranked_query(
        db,
        &format!(
            r#"
            SELECT brand, COALESCE(SUM(price), 0) AS revenue
            FROM events
            WHERE event_type = 'purchase' AND brand IS NOT NULL
            GROUP BY brand
            ORDER BY revenue DESC, brand ASC
            LIMIT {TOP_N}
            "#
        ),
    )
    .await
}

/// Top categories by view-event count, same ordering and tie-break policy.
pub async fn top_viewed_categories_inner(db: &DuckDbStore) -> Result<Vec<RankedRow>> {
    ranked_query(
        db,
        &format!(
            r#"
            SELECT category_code, CAST(COUNT(*) AS DOUBLE) AS views
            FROM events
            WHERE event_type = 'view' AND category_code IS NOT NULL
            GROUP BY category_code
            ORDER BY views DESC, category_code ASC
            LIMIT {TOP_N}
            "#
        ),
    )
    .await
}

async fn ranked_query(db: &DuckDbStore, sql: &str) -> Result<Vec<RankedRow>> {
    let conn = db.conn.lock().await;
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], |row| {
        Ok(RankedRow {
            key: row.get(0)?,
            value: row.get(1)?,
        })
    })?;
    let mut out = Vec::with_capacity(TOP_N as usize);
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

impl DuckDbStore {
    /// Top five brands by summed purchase revenue.
    pub async fn top_brands(&self) -> Result<Vec<RankedRow>> {
        top_brands_inner(self).await
    }

    /// Top five most viewed categories.
    pub async fn top_viewed_categories(&self) -> Result<Vec<RankedRow>> {
        top_viewed_categories_inner(self).await
    }
}
