pub mod dashboard_impl;
pub mod error;
pub mod queries;
pub mod store;

pub use error::StoreError;
pub use store::DuckDbStore;

/// Re-export the `duckdb` crate so consumers (especially tests) can use
/// `cartwheel_duckdb::duckdb::params!` without an extra dependency.
pub use duckdb;
