use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{routes, state::AppState};

/// Construct the Axum [`Router`] with all routes and middleware attached.
///
/// Middleware is applied in outer-to-inner order (outermost runs first on
/// request, last on response):
///
/// 1. `TraceLayer` — structured request/response logging via `tracing`.
/// 2. `CorsLayer` — permissive CORS; the dashboard page may be served from
///    a different origin than this API.
/// 3. `CompressionLayer` — the full-dashboard payload compresses well.
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/dashboard", get(routes::dashboard::get_dashboard))
        .route("/api/kpis", get(routes::dashboard::get_kpis))
        .route("/api/brands", get(routes::dashboard::get_top_brands))
        .route(
            "/api/categories",
            get(routes::dashboard::get_top_viewed_categories),
        )
        .route("/api/sales/daily", get(routes::dashboard::get_daily_sales))
        .route(
            "/api/visitors/hourly",
            get(routes::dashboard::get_visitors_by_hour),
        )
        .route(
            "/api/revenue/weekday",
            get(routes::dashboard::get_revenue_by_weekday),
        )
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .with_state(state)
}
