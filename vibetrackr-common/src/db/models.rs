//! Database models

use serde::{Deserialize, Serialize};

/// Registered user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub created_at: i64,
}

/// Journal entry row
///
/// `analysis` holds the serialized affect analysis record attached at
/// create/update time; it is replaced wholesale on update, never patched.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Journal {
    pub id: String,
    pub user_uid: String,
    pub title: String,
    pub content: String,
    pub analysis: Option<String>,
    pub timestamp: i64,
    pub date: String,
}
