pub mod breakdowns;
pub mod kpis;
pub mod rankings;
