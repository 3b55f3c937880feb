use async_trait::async_trait;

use cartwheel_core::dashboard::{BreakdownRow, DashboardBackend, KpiSummary, RankedRow};

use crate::DuckDbStore;

#[async_trait]
impl DashboardBackend for DuckDbStore {
    async fn ping(&self) -> anyhow::Result<()> {
        DuckDbStore::ping(self).await.map_err(Into::into)
    }

    async fn kpi_summary(&self) -> anyhow::Result<KpiSummary> {
        crate::queries::kpis::kpi_summary_inner(self).await
    }

    async fn top_brands(&self) -> anyhow::Result<Vec<RankedRow>> {
        crate::queries::rankings::top_brands_inner(self).await
    }

    async fn top_viewed_categories(&self) -> anyhow::Result<Vec<RankedRow>> {
        crate::queries::rankings::top_viewed_categories_inner(self).await
    }

    async fn daily_sales(&self) -> anyhow::Result<Vec<BreakdownRow>> {
        crate::queries::breakdowns::daily_sales_inner(self).await
    }

    async fn visitors_by_hour(&self) -> anyhow::Result<Vec<BreakdownRow>> {
        crate::queries::breakdowns::visitors_by_hour_inner(self).await
    }

    async fn revenue_by_weekday(&self) -> anyhow::Result<Vec<BreakdownRow>> {
        crate::queries::breakdowns::revenue_by_weekday_inner(self).await
    }
}
