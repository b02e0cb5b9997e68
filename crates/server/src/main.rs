//! finjudge-server: REST API for financial-report PDF preprocessing.
//!
//! Exposes the extract → chunk → batch pipeline over HTTP so workflow
//! automations can pull chunked report text for LLM evaluation.

mod api;
mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tracing::info;

use finjudge_core::Config;

use crate::state::AppState;

// ── CLI ─────────────────────────────────────────────────────────────

/// REST API for financial-report PDF preprocessing.
#[derive(Parser, Debug)]
#[command(name = "finjudge-server", version, about)]
struct Cli {
    /// Port to listen on (overrides PORT).
    #[arg(long)]
    port: Option<u16>,

    /// Directory of per-ticker report PDFs (overrides COMPANY_DATA_DIR).
    #[arg(long)]
    company_data_dir: Option<std::path::PathBuf>,
}

// ── Router ──────────────────────────────────────────────────────────

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/pdf/preprocess", post(api::preprocess_pdf))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── main ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    finjudge_core::config::load_dotenv();
    let mut config = Config::from_env();
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(dir) = cli.company_data_dir {
        config.storage.company_data_dir = dir;
    }
    config.log_summary();

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState { config });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
