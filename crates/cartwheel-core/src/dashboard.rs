//! Dashboard result types and the backend abstraction.

use serde::Serialize;

use crate::format::{format_aov, format_orders, format_revenue};

/// Row cap for the two ranking queries (brands, viewed categories).
pub const TOP_N: i64 = 5;

/// The three scalar KPIs, computed over purchase rows only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct KpiSummary {
    pub total_orders: i64,
    pub total_revenue: f64,
    /// `total_revenue / total_orders`, or 0.0 when there are no orders.
    pub avg_order_value: f64,
}

impl KpiSummary {
    /// Build a summary from the raw aggregates, guarding the AOV division.
    ///
    /// Zero purchase rows yield an all-zero summary rather than a NaN or a
    /// division fault.
    pub fn from_totals(total_orders: i64, total_revenue: f64) -> Self {
        let avg_order_value = if total_orders > 0 {
            total_revenue / total_orders as f64
        } else {
            0.0
        };
        Self {
            total_orders,
            total_revenue,
            avg_order_value,
        }
    }

    pub fn formatted(&self) -> FormattedKpis {
        FormattedKpis {
            total_orders: format_orders(self.total_orders),
            total_revenue: format_revenue(self.total_revenue),
            avg_order_value: format_aov(self.avg_order_value),
        }
    }
}

/// Display strings for the KPI tiles (`"1.23K"`, `"$2.50M"`, `"$20.00"`).
#[derive(Debug, Clone, Serialize)]
pub struct FormattedKpis {
    pub total_orders: String,
    pub total_revenue: String,
    pub avg_order_value: String,
}

/// One row of a top-N table: a group key and its aggregate value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    pub key: String,
    pub value: f64,
}

/// One row of an ordered calendar breakdown. `bucket` is the day-of-month,
/// hour-of-day or weekday index depending on the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub bucket: u32,
    pub value: f64,
}

/// All seven pipeline results, assembled once per evaluation and handed to
/// the rendering collaborator as-is.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub kpis: KpiSummary,
    pub kpis_formatted: FormattedKpis,
    pub top_brands: Vec<RankedRow>,
    pub top_viewed_categories: Vec<RankedRow>,
    pub daily_sales: Vec<BreakdownRow>,
    pub visitors_by_hour: Vec<BreakdownRow>,
    pub revenue_by_weekday: Vec<BreakdownRow>,
}

/// Query seam over the loaded event dataset.
///
/// The store is shared read-only across all seven queries; nothing here
/// mutates it, so implementations need no locking beyond whatever their
/// connection requires. Tests substitute a fixture-seeded implementation
/// for the Parquet-backed one.
#[async_trait::async_trait]
pub trait DashboardBackend: Send + Sync + 'static {
    /// Lightweight liveness check for `/health`.
    async fn ping(&self) -> anyhow::Result<()>;

    async fn kpi_summary(&self) -> anyhow::Result<KpiSummary>;

    /// Top five brands by summed purchase revenue, descending.
    async fn top_brands(&self) -> anyhow::Result<Vec<RankedRow>>;

    /// Top five categories by view-event count, descending.
    async fn top_viewed_categories(&self) -> anyhow::Result<Vec<RankedRow>>;

    /// Purchase revenue per day-of-month, ascending by day.
    async fn daily_sales(&self) -> anyhow::Result<Vec<BreakdownRow>>;

    /// View-event count per hour-of-day, ascending by hour.
    async fn visitors_by_hour(&self) -> anyhow::Result<Vec<BreakdownRow>>;

    /// Purchase revenue per weekday index (0 = Monday), ascending.
    async fn revenue_by_weekday(&self) -> anyhow::Result<Vec<BreakdownRow>>;

    /// Run all seven queries and assemble the full dashboard.
    ///
    /// Each `.await` is a synchronous materialization point; the queries are
    /// independent, so the sequential order here is not a contract. Any
    /// failure aborts the whole evaluation — no partial dashboard.
    async fn dashboard(&self) -> anyhow::Result<Dashboard> {
        let kpis = self.kpi_summary().await?;
        Ok(Dashboard {
            kpis_formatted: kpis.formatted(),
            kpis,
            top_brands: self.top_brands().await?,
            top_viewed_categories: self.top_viewed_categories().await?,
            daily_sales: self.daily_sales().await?,
            visitors_by_hour: self.visitors_by_hour().await?,
            revenue_by_weekday: self.revenue_by_weekday().await?,
        })
    }
}
