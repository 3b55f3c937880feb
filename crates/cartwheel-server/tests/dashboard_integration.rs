use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use cartwheel_core::{config::Config, event::EventRecord};
use cartwheel_duckdb::DuckDbStore;
use cartwheel_server::{app::build_app, state::AppState};

fn ts(day: u32, hour: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 11, day, hour, 0, 0).single().expect("valid ts")
}

fn test_app(rows: &[EventRecord]) -> axum::Router {
    let store = DuckDbStore::open_in_memory(rows).expect("store");
    let config = Config {
        port: 0,
        dataset_path: "unused".to_string(),
        duckdb_memory_limit: "1GB".to_string(),
    };
    build_app(Arc::new(AppState::new(Arc::new(store), config)))
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("req"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let value = serde_json::from_slice(&bytes).expect("json");
    (status, value)
}

#[tokio::test]
async fn health_returns_ok() {
    let (status, body) = get_json(test_app(&[]), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn dashboard_returns_all_seven_results() {
    let app = test_app(&[
        EventRecord::view(ts(1, 0), "electronics.phone"),
        EventRecord::view(ts(1, 5), "electronics.phone"),
        EventRecord::purchase(ts(4, 9), 10.0, "acme"),
        EventRecord::purchase(ts(4, 9), 20.0, "acme"),
        EventRecord::purchase(ts(5, 9), 30.0, "globex"),
    ]);

    let (status, body) = get_json(app, "/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["kpis"]["total_orders"], 3);
    assert_eq!(body["kpis"]["total_revenue"], 60.0);
    assert_eq!(body["kpis"]["avg_order_value"], 20.0);
    assert_eq!(body["kpis_formatted"]["total_orders"], "0.00K");
    assert_eq!(body["kpis_formatted"]["avg_order_value"], "$20.00");

    assert_eq!(body["top_brands"][0]["key"], "acme");
    assert_eq!(body["top_brands"][0]["value"], 30.0);
    assert_eq!(body["top_viewed_categories"][0]["value"], 2.0);
    assert_eq!(body["daily_sales"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["visitors_by_hour"][0]["bucket"], 0);
    assert_eq!(body["revenue_by_weekday"][0]["bucket"], 0);
}

#[tokio::test]
async fn dashboard_on_empty_dataset_is_well_formed() {
    let (status, body) = get_json(test_app(&[]), "/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kpis"]["total_orders"], 0);
    assert_eq!(body["top_brands"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn kpis_endpoint_returns_raw_and_formatted() {
    let app = test_app(&[
        EventRecord::purchase(ts(1, 9), 10.0, "acme"),
        EventRecord::purchase(ts(2, 9), 20.0, "acme"),
        EventRecord::purchase(ts(3, 9), 30.0, "acme"),
    ]);

    let (status, body) = get_json(app, "/api/kpis").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kpis"]["total_orders"], 3);
    assert_eq!(body["kpis_formatted"]["avg_order_value"], "$20.00");
}

#[tokio::test]
async fn per_chart_endpoints_return_row_tables() {
    let app = test_app(&[
        EventRecord::view(ts(1, 0), "a"),
        EventRecord::view(ts(1, 0), "a"),
        EventRecord::view(ts(1, 5), "b"),
        EventRecord::view(ts(1, 23), "c"),
    ]);

    let (status, body) = get_json(app.clone(), "/api/visitors/hourly").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["rows"].as_array().expect("rows").clone();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["bucket"], 0);
    assert_eq!(rows[0]["value"], 2.0);

    let (status, body) = get_json(app, "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rows"][0]["key"], "a");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = test_app(&[])
        .oneshot(
            Request::builder()
                .uri("/api/unknown")
                .body(Body::empty())
                .expect("req"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
