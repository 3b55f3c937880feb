use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use cartwheel_server::state::AppState;

/// `cartwheel health` — liveness probe for Docker HEALTHCHECK.
///
/// Calls `GET http://localhost:$CARTWHEEL_PORT/health`.
/// Exits 0 if the server responds with HTTP 200, exits 1 otherwise.
fn run_health_check() -> ! {
    let port = std::env::var("CARTWHEEL_PORT").unwrap_or_else(|_| "3000".to_string());
    let url = format!("http://localhost:{}/health", port);
    match ureq::get(&url).call() {
        Ok(resp) if resp.status() == 200 => std::process::exit(0),
        _ => std::process::exit(1),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Health-check subcommand — handled before tokio does any real work so
    // the probe stays fast.
    let args: Vec<String> = std::env::args().collect();
    if args.get(1).map(|s| s.as_str()) == Some("health") {
        run_health_check();
    }

    // Initialise structured JSON logging. Level controlled via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cartwheel=info".parse()?),
        )
        .json()
        .init();

    let cfg = cartwheel_core::config::Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Open the dataset. Load and derivation failures are unrecoverable: the
    // process exits instead of serving a dashboard with no data behind it.
    let store = cartwheel_duckdb::DuckDbStore::open(&cfg.dataset_path, &cfg.duckdb_memory_limit)
        .map_err(|e| {
            tracing::error!(error = %e, dataset = %cfg.dataset_path, "Failed to open dataset");
            anyhow::anyhow!(e)
        })?;
    info!(dataset = %cfg.dataset_path, "Event dataset ready");

    let state = Arc::new(AppState::new(Arc::new(store), cfg.clone()));

    let addr = format!("0.0.0.0:{}", cfg.port);
    let app = cartwheel_server::app::build_app(Arc::clone(&state));

    info!(port = cfg.port, "Cartwheel listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    Ok(())
}
