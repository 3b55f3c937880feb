use std::collections::HashSet;
use std::sync::Arc;

use duckdb::Connection;
use tokio::sync::Mutex;
use tracing::info;

use cartwheel_core::event::EventRecord;

use crate::error::StoreError;

/// Columns the merged dataset must expose before derivation.
const REQUIRED_COLUMNS: [&str; 5] =
    ["event_time", "event_type", "price", "brand", "category_code"];

/// A DuckDB-backed handle over the merged event dataset.
///
/// The Parquet file is never loaded eagerly: [`DuckDbStore::open`] only
/// registers views, and each aggregation streams the scan under DuckDB's
/// memory limit, so datasets larger than RAM work. DuckDB reads are safe to
/// share, but the connection object itself is not `Sync`; we wrap it in
/// `Arc<Mutex<_>>` so the store clones cheaply across Axum handlers, the
/// same way a write-heavy backend would.
pub struct DuckDbStore {
    pub(crate) conn: Arc<Mutex<Connection>>,
}

/// Session settings applied at open time.
///
/// `TimeZone` is pinned to UTC because the derived `day`/`hour`/`weekday`
/// columns are defined over UTC timestamps and `date_part` on a
/// `TIMESTAMPTZ` honours the session timezone.
fn init_sql(memory_limit: &str) -> String {
    format!(
        r#"
        SET memory_limit = '{memory_limit}';
        SET threads = 2;
        SET TimeZone = 'UTC';
        "#
    )
}

/// Escape a string for embedding as a SQL literal.
///
/// DuckDB table functions such as `read_parquet` do not take prepared
/// parameters, so the dataset path is the one place we inline a literal.
fn quote_literal(raw: &str) -> String {
    raw.replace('\'', "''")
}

impl DuckDbStore {
    /// Open a lazy handle over the Parquet dataset at `path`.
    ///
    /// `memory_limit` is a DuckDB size string such as `"1GB"` or `"512MB"`,
    /// read from `Config.duckdb_memory_limit` at the call site.
    ///
    /// Fails with [`StoreError::DataLoad`] if the file is missing, unreadable
    /// or lacks a required column, and with [`StoreError::Derivation`] if
    /// `event_time` cannot be treated as a timezone-aware timestamp. No row
    /// data is materialized here.
    pub fn open(path: &str, memory_limit: &str) -> Result<Self, StoreError> {
        if !std::path::Path::new(path).exists() {
            return Err(StoreError::DataLoad(format!("dataset not found: {path}")));
        }

        let conn = Connection::open_in_memory()?;
        conn.execute_batch(&init_sql(memory_limit))?;

        // Registering the view reads only the Parquet footer; a corrupt or
        // unreadable file fails here.
        conn.execute_batch(&format!(
            "CREATE OR REPLACE VIEW events_raw AS SELECT * FROM read_parquet('{}')",
            quote_literal(path)
        ))
        .map_err(|e| StoreError::DataLoad(format!("cannot read {path}: {e}")))?;

        Self::check_schema(&conn)?;
        Self::derive_time_fields(&conn)?;

        info!(
            "dataset opened at {} with memory_limit={}, threads=2",
            path, memory_limit
        );
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an **in-memory** store seeded from fixture rows.
    ///
    /// Intended for tests: the seeded table sits behind the same derived
    /// `events` view as the Parquet path, so the derivation SQL is exercised
    /// identically. Data is discarded on drop.
    pub fn open_in_memory(rows: &[EventRecord]) -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(&init_sql("1GB"))?;
        conn.execute_batch(
            "CREATE TABLE events_raw (
                event_time TIMESTAMPTZ,
                event_type VARCHAR,
                price DOUBLE,
                brand VARCHAR,
                category_code VARCHAR
            )",
        )?;
        for row in rows {
            conn.execute(
                "INSERT INTO events_raw (event_time, event_type, price, brand, category_code)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                duckdb::params![
                    row.event_time.to_rfc3339(),
                    row.event_type.as_str(),
                    row.price,
                    row.brand,
                    row.category_code,
                ],
            )?;
        }
        Self::derive_time_fields(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Verify all five required columns are present on `events_raw`.
    fn check_schema(conn: &Connection) -> Result<(), StoreError> {
        let mut stmt = conn.prepare("SELECT column_name FROM (DESCRIBE events_raw)")?;
        let present: HashSet<String> = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<_, _>>()?;

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| !present.contains(**c))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(StoreError::DataLoad(format!(
                "dataset schema is missing required column(s): {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }

    /// Attach the derived calendar columns as a view over `events_raw`.
    ///
    /// - `day`:     day-of-month, 1–31
    /// - `hour`:    hour-of-day, 0–23
    /// - `weekday`: ISO index, 0 = Monday … 6 = Sunday (`isodow` is 1-based)
    ///
    /// Rows with a NULL `event_time` have no defined calendar position and
    /// are excluded. The trailing probe touches one row so that an
    /// uncastable `event_time` column fails at open time instead of inside
    /// the first aggregation.
    fn derive_time_fields(conn: &Connection) -> Result<(), StoreError> {
        conn.execute_batch(
            r#"
            CREATE OR REPLACE VIEW events AS
            SELECT
                event_type,
                price,
                brand,
                category_code,
                CAST(event_time AS TIMESTAMPTZ) AS event_time,
                CAST(date_part('day', CAST(event_time AS TIMESTAMPTZ)) AS INTEGER) AS day,
                CAST(date_part('hour', CAST(event_time AS TIMESTAMPTZ)) AS INTEGER) AS hour,
                CAST(date_part('isodow', CAST(event_time AS TIMESTAMPTZ)) - 1 AS INTEGER) AS weekday
            FROM events_raw
            WHERE event_time IS NOT NULL
            "#,
        )
        .map_err(|e| StoreError::Derivation(e.to_string()))?;

        conn.execute_batch("SELECT day, hour, weekday FROM events LIMIT 1")
            .map_err(|e| StoreError::Derivation(e.to_string()))?;
        Ok(())
    }

    /// Execute `SELECT 1` as a lightweight liveness check.
    ///
    /// Called by the `/health` endpoint. Returns an error if the connection
    /// is unavailable.
    pub async fn ping(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().await;
        conn.execute_batch("SELECT 1")?;
        Ok(())
    }
}
