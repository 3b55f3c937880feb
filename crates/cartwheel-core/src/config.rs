#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Path to the merged Parquet event dataset.
    pub dataset_path: String,
    /// DuckDB size string such as "1GB" or "512MB".
    pub duckdb_memory_limit: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            port: std::env::var("CARTWHEEL_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|e| format!("invalid port: {e}"))?,
            dataset_path: std::env::var("CARTWHEEL_DATASET")
                .unwrap_or_else(|_| "./data/parquet/MERGED.parquet".to_string()),
            duckdb_memory_limit: std::env::var("CARTWHEEL_DUCKDB_MEMORY")
                .unwrap_or_else(|_| "1GB".to_string()),
        })
    }
}
