use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Interaction kind recorded in the `event_type` column.
///
/// Every row in the merged dataset carries exactly one of these three values;
/// all pipeline filters key off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    View,
    Cart,
    Purchase,
}

impl EventType {
    /// The string stored in the dataset column.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::View => "view",
            EventType::Cart => "cart",
            EventType::Purchase => "purchase",
        }
    }
}

/// One row of the merged e-commerce event dataset.
///
/// Mirrors the Parquet schema column-for-column. `price` is only meaningful
/// on purchase rows; `brand` and `category_code` are grouping keys and may
/// be absent on any row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub event_time: DateTime<Utc>,
    pub event_type: EventType,
    pub price: Option<f64>,
    pub brand: Option<String>,
    pub category_code: Option<String>,
}

impl EventRecord {
    pub fn purchase(event_time: DateTime<Utc>, price: f64, brand: &str) -> Self {
        Self {
            event_time,
            event_type: EventType::Purchase,
            price: Some(price),
            brand: Some(brand.to_string()),
            category_code: None,
        }
    }

    pub fn view(event_time: DateTime<Utc>, category_code: &str) -> Self {
        Self {
            event_time,
            event_type: EventType::View,
            price: None,
            brand: None,
            category_code: Some(category_code.to_string()),
        }
    }

    pub fn cart(event_time: DateTime<Utc>) -> Self {
        Self {
            event_time,
            event_type: EventType::Cart,
            price: None,
            brand: None,
            category_code: None,
        }
    }
}
