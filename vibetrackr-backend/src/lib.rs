//! vibetrackr-backend library interface
//!
//! Exposes the affect engine and the HTTP surface for integration
//! testing.

pub mod affect;
pub mod api;
pub mod db;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::affect::JournalAnalyzer;

/// Browser origins allowed to call the API
const ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000", "https://vibetrackr.netlify.app"];

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Affect analysis pipeline
    pub analyzer: Arc<JournalAnalyzer>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(db: SqlitePool, analyzer: Arc<JournalAnalyzer>) -> Self {
        Self {
            db,
            analyzer,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS
                .iter()
                .map(|o| o.parse::<HeaderValue>().expect("static origin")),
        ))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    Router::new()
        .merge(api::user_routes())
        .merge(api::journal_routes())
        .merge(api::health_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
