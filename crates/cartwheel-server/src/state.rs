use std::sync::Arc;

use cartwheel_core::{config::Config, dashboard::DashboardBackend};

/// Shared application state injected into every Axum handler via
/// [`axum::extract::State`].
pub struct AppState {
    /// The dashboard backend. Held as `Arc<dyn DashboardBackend>` so tests
    /// can substitute a fixture-seeded store for the Parquet-backed one.
    pub backend: Arc<dyn DashboardBackend>,

    /// Parsed configuration, loaded once at startup from environment variables.
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(backend: Arc<dyn DashboardBackend>, config: Config) -> Self {
        Self {
            backend,
            config: Arc::new(config),
        }
    }
}
