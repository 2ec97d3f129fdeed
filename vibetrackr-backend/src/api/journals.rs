//! Journal CRUD handlers
//!
//! Create and update run the affect analyzer on the submitted content
//! and attach the resulting analysis record; the record is recomputed
//! wholesale on update, never patched.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vibetrackr_common::db::models::Journal;

use crate::affect::JournalAnalysis;
use crate::api::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Journal create/update request body
#[derive(Debug, Deserialize)]
pub struct JournalRequest {
    pub title: String,
    pub content: String,
}

/// Journal entry as returned by the API
#[derive(Debug, Serialize)]
pub struct JournalResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Analysis record attached at create/update time
    pub analysis: Option<JournalAnalysis>,
    pub timestamp: i64,
    pub date: String,
}

impl JournalResponse {
    pub fn from_row(journal: Journal) -> Self {
        // Rows written by this service always hold a valid record;
        // tolerate a missing or unreadable one rather than failing the
        // whole listing.
        let analysis = journal
            .analysis
            .as_deref()
            .and_then(|json| serde_json::from_str(json).ok());
        Self {
            id: journal.id,
            title: journal.title,
            content: journal.content,
            analysis,
            timestamp: journal.timestamp,
            date: journal.date,
        }
    }
}

/// Analyze content and assemble a journal row stamped with now
async fn build_journal_row(
    state: &AppState,
    user_uid: &str,
    id: String,
    request: JournalRequest,
) -> ApiResult<Journal> {
    let analysis = state.analyzer.analyze(&request.content).await?;
    let analysis_json = serde_json::to_string(&analysis)
        .map_err(|e| ApiError::Internal(format!("Failed to serialize analysis: {}", e)))?;

    let now = Utc::now();
    Ok(Journal {
        id,
        user_uid: user_uid.to_string(),
        title: request.title,
        content: request.content,
        analysis: Some(analysis_json),
        timestamp: now.timestamp(),
        date: now.format("%Y-%m-%d").to_string(),
    })
}

/// POST /journals
///
/// Add a journal entry; the content is analyzed before the row is
/// stored, so a backend failure stores nothing.
pub async fn add_journal(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<JournalRequest>,
) -> ApiResult<(StatusCode, Json<JournalResponse>)> {
    let journal = build_journal_row(&state, &user.uid, Uuid::new_v4().to_string(), request).await?;

    crate::db::journals::insert_journal(&state.db, &journal).await?;
    tracing::info!(uid = %user.uid, journal_id = %journal.id, "Journal added");

    Ok((StatusCode::CREATED, Json(JournalResponse::from_row(journal))))
}

/// GET /journals
///
/// All of the authenticated user's journals, newest first.
pub async fn get_journals(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<Vec<JournalResponse>>> {
    let journals = crate::db::journals::list_journals(&state.db, &user.uid).await?;
    Ok(Json(
        journals.into_iter().map(JournalResponse::from_row).collect(),
    ))
}

/// PUT /journals/:id
///
/// Replace a journal's title/content and re-run the analysis.
pub async fn update_journal(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(journal_id): Path<String>,
    Json(request): Json<JournalRequest>,
) -> ApiResult<Json<JournalResponse>> {
    // Analyze only for journals that exist; a miss is a plain 404
    if crate::db::journals::get_journal(&state.db, &user.uid, &journal_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound(format!("Journal {}", journal_id)));
    }

    let journal = build_journal_row(&state, &user.uid, journal_id, request).await?;

    crate::db::journals::update_journal(&state.db, &journal).await?;
    tracing::info!(uid = %user.uid, journal_id = %journal.id, "Journal updated");

    Ok(Json(JournalResponse::from_row(journal)))
}

/// DELETE /journals/:id
pub async fn delete_journal(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(journal_id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let deleted = crate::db::journals::delete_journal(&state.db, &user.uid, &journal_id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("Journal {}", journal_id)));
    }

    tracing::info!(uid = %user.uid, journal_id = %journal_id, "Journal deleted");
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

/// Build journal routes
pub fn journal_routes() -> Router<AppState> {
    Router::new()
        .route("/journals", post(add_journal).get(get_journals))
        .route("/journals/:id", put(update_journal).delete(delete_journal))
}
