use chrono::{TimeZone, Utc};

use cartwheel_core::event::EventRecord;
use cartwheel_duckdb::DuckDbStore;

fn at(day: u32, hour: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 11, day, hour, 30, 0).single().expect("valid ts")
}

#[tokio::test]
async fn visitors_by_hour_groups_and_orders_ascending() {
    let store = DuckDbStore::open_in_memory(&[
        EventRecord::view(at(1, 0), "a"),
        EventRecord::view(at(2, 0), "a"),
        EventRecord::view(at(3, 5), "b"),
        EventRecord::view(at(4, 23), "c"),
    ])
    .expect("store");

    let hours = store.visitors_by_hour().await.expect("hours");
    let pairs: Vec<(u32, f64)> = hours.iter().map(|r| (r.bucket, r.value)).collect();
    assert_eq!(pairs, [(0, 2.0), (5, 1.0), (23, 1.0)]);
}

#[tokio::test]
async fn hourly_counts_partition_the_view_subset() {
    let rows: Vec<EventRecord> = (0u32..50)
        .map(|i| EventRecord::view(at(1 + i % 28, i % 24), "a"))
        .collect();
    let store = DuckDbStore::open_in_memory(&rows).expect("store");

    let hours = store.visitors_by_hour().await.expect("hours");
    let total: f64 = hours.iter().map(|r| r.value).sum();
    assert_eq!(total, 50.0);
    for row in &hours {
        assert!(row.bucket <= 23);
    }
}

#[tokio::test]
async fn daily_sales_sum_per_day_of_month() {
    let store = DuckDbStore::open_in_memory(&[
        EventRecord::purchase(at(1, 9), 10.0, "acme"),
        EventRecord::purchase(at(1, 18), 15.0, "acme"),
        EventRecord::purchase(at(20, 9), 7.5, "globex"),
        EventRecord::view(at(2, 9), "a"),
    ])
    .expect("store");

    let daily = store.daily_sales().await.expect("daily");
    let pairs: Vec<(u32, f64)> = daily.iter().map(|r| (r.bucket, r.value)).collect();
    assert_eq!(pairs, [(1, 25.0), (20, 7.5)]);
    for row in &daily {
        assert!((1..=31).contains(&row.bucket));
    }
}

#[tokio::test]
async fn weekday_is_iso_monday_zero() {
    // 2019-11-04 was a Monday, 2019-11-10 a Sunday.
    let store = DuckDbStore::open_in_memory(&[
        EventRecord::purchase(at(4, 9), 10.0, "acme"),
        EventRecord::purchase(at(10, 9), 20.0, "acme"),
    ])
    .expect("store");

    let weekdays = store.revenue_by_weekday().await.expect("weekdays");
    let pairs: Vec<(u32, f64)> = weekdays.iter().map(|r| (r.bucket, r.value)).collect();
    assert_eq!(pairs, [(0, 10.0), (6, 20.0)]);
}

#[tokio::test]
async fn weekday_derivation_is_stable_across_loads() {
    let rows = [EventRecord::purchase(at(6, 9), 10.0, "acme")];

    let first = DuckDbStore::open_in_memory(&rows)
        .expect("store")
        .revenue_by_weekday()
        .await
        .expect("weekdays");
    let second = DuckDbStore::open_in_memory(&rows)
        .expect("store")
        .revenue_by_weekday()
        .await
        .expect("weekdays");

    assert_eq!(first, second);
    // 2019-11-06 was a Wednesday.
    assert_eq!(first[0].bucket, 2);
}

#[tokio::test]
async fn breakdowns_empty_when_no_matching_rows() {
    let store = DuckDbStore::open_in_memory(&[]).expect("store");

    assert!(store.daily_sales().await.expect("daily").is_empty());
    assert!(store.visitors_by_hour().await.expect("hours").is_empty());
    assert!(store.revenue_by_weekday().await.expect("weekdays").is_empty());
}
