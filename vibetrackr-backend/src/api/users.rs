//! User registration and profile handlers

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vibetrackr_common::api::auth::{generate_token, hash_token};
use vibetrackr_common::db::models::User;

use crate::api::auth::AuthUser;
use crate::api::journals::JournalResponse;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// POST /users request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// POST /users response
///
/// The bearer token is returned exactly once; only its hash is stored.
#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub uid: String,
    pub token: String,
}

/// GET /user response: profile plus journals
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub journals: Vec<JournalResponse>,
}

/// POST /users
///
/// Register a new user and issue their bearer token.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<CreateUserResponse>)> {
    if request.name.trim().is_empty() || request.email.trim().is_empty() {
        return Err(ApiError::BadRequest("name and email are required".to_string()));
    }

    let user = User {
        uid: Uuid::new_v4().to_string(),
        name: request.name,
        email: request.email,
        created_at: Utc::now().timestamp(),
    };

    let token = generate_token();
    crate::db::users::insert_user(&state.db, &user, &hash_token(&token)).await?;

    tracing::info!(uid = %user.uid, "User created");

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            uid: user.uid,
            token,
        }),
    ))
}

/// GET /user
///
/// The authenticated user's profile with all their journals.
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let journals = crate::db::journals::list_journals(&state.db, &user.uid).await?;

    Ok(Json(UserResponse {
        uid: user.uid,
        name: user.name,
        email: user.email,
        journals: journals.into_iter().map(JournalResponse::from_row).collect(),
    }))
}

/// Build user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/user", get(get_user))
}
