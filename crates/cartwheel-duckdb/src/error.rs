use thiserror::Error;

/// Failures raised while opening the dataset or deriving time fields.
///
/// `DataLoad` and `Derivation` are fatal for a dashboard evaluation: the
/// caller surfaces a single failure state, never a partial page.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("dataset load failed: {0}")]
    DataLoad(String),

    #[error("event_time derivation failed: {0}")]
    Derivation(String),

    #[error("query failed: {0}")]
    Query(#[from] duckdb::Error),
}
