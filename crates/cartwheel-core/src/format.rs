//! Display formatting for the three KPI scalars.
//!
//! The dashboard shows orders in thousands, revenue in millions and AOV as a
//! plain currency amount. Formatting lives here, at the pipeline boundary,
//! so the rendering collaborator only ever receives ready strings.

/// `1234` → `"1.23K"`.
pub fn format_orders(total_orders: i64) -> String {
    format!("{:.2}K", total_orders as f64 / 1_000.0)
}

/// `2_500_000.0` → `"$2.50M"`.
pub fn format_revenue(total_revenue: f64) -> String {
    format!("${:.2}M", total_revenue / 1_000_000.0)
}

/// `20.0` → `"$20.00"`.
pub fn format_aov(avg_order_value: f64) -> String {
    format!("${avg_order_value:.2}")
}
