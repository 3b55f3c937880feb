use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// `GET /api/dashboard` — all seven pipeline results assembled at once.
///
/// This is the endpoint the page render calls; a failure in any of the
/// seven queries surfaces as a single 503 rather than a partial payload.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let dashboard = state
        .backend
        .dashboard()
        .await
        .map_err(AppError::DashboardUnavailable)?;
    Ok(Json(dashboard))
}

/// `GET /api/kpis` — the three scalar KPIs, raw and display-formatted.
pub async fn get_kpis(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let kpis = state.backend.kpi_summary().await?;
    Ok(Json(json!({
        "kpis": kpis,
        "kpis_formatted": kpis.formatted()
    })))
}

/// `GET /api/brands` — top 5 brands by purchase revenue.
pub async fn get_top_brands(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.backend.top_brands().await?;
    Ok(Json(json!({ "rows": rows })))
}

/// `GET /api/categories` — top 5 most viewed categories.
pub async fn get_top_viewed_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.backend.top_viewed_categories().await?;
    Ok(Json(json!({ "rows": rows })))
}

/// `GET /api/sales/daily` — purchase revenue per day-of-month.
pub async fn get_daily_sales(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.backend.daily_sales().await?;
    Ok(Json(json!({ "rows": rows })))
}

/// `GET /api/visitors/hourly` — view counts per hour-of-day.
pub async fn get_visitors_by_hour(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.backend.visitors_by_hour().await?;
    Ok(Json(json!({ "rows": rows })))
}

/// `GET /api/revenue/weekday` — purchase revenue per weekday (0 = Monday).
pub async fn get_revenue_by_weekday(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.backend.revenue_by_weekday().await?;
    Ok(Json(json!({ "rows": rows })))
}
