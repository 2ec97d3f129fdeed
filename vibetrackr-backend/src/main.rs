//! vibetrackr-backend - Journaling Web Service
//!
//! Users authenticate with bearer tokens, write journal entries, and
//! each entry is scored through the affect engine on create/update.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vibetrackr_common::config::ServerConfig;

use vibetrackr_backend::affect::{AnalyzerOptions, GradioVadClient, JournalAnalyzer};
use vibetrackr_backend::{build_router, AppState};

#[derive(Debug, Parser)]
#[command(name = "vibetrackr-backend", version, about = "VibeTrackr journaling backend")]
struct Args {
    /// Data root folder (database lives here)
    #[arg(long)]
    root_folder: Option<String>,

    /// Bind address, e.g. 127.0.0.1:5810
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    info!("Starting vibetrackr-backend");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::resolve(args.root_folder.as_deref(), args.bind.as_deref())?;
    info!("Root folder: {}", config.root_folder.display());
    info!("VAD backend: {}", config.vad_backend_url);

    let db_path = config.database_path();
    info!("Database: {}", db_path.display());
    let db_pool = vibetrackr_common::db::init_database_pool(&db_path).await?;
    info!("Database connection established");

    let vad_client = GradioVadClient::new(
        &config.vad_backend_url,
        Duration::from_secs(config.analysis.request_timeout_secs),
        Duration::from_millis(config.analysis.call_delay_ms),
    )
    .map_err(|e| anyhow::anyhow!("Failed to build VAD client: {}", e))?;

    let analyzer = Arc::new(JournalAnalyzer::new(
        Arc::new(vad_client),
        AnalyzerOptions::from_settings(&config.analysis),
    ));

    let state = AppState::new(db_pool, analyzer);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/health", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
