//! User queries

use sqlx::SqlitePool;
use vibetrackr_common::db::models::User;
use vibetrackr_common::Result;

/// Insert a new user with their token hash
pub async fn insert_user(pool: &SqlitePool, user: &User, token_hash: &str) -> Result<()> {
    sqlx::query(
        "INSERT INTO users (uid, name, email, token_hash, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&user.uid)
    .bind(&user.name)
    .bind(&user.email)
    .bind(token_hash)
    .bind(user.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Resolve the user owning a token hash, if any
pub async fn find_user_by_token_hash(pool: &SqlitePool, token_hash: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT uid, name, email, created_at FROM users WHERE token_hash = ?",
    )
    .bind(token_hash)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// Fetch a user by uid
pub async fn get_user(pool: &SqlitePool, uid: &str) -> Result<Option<User>> {
    let user =
        sqlx::query_as::<_, User>("SELECT uid, name, email, created_at FROM users WHERE uid = ?")
            .bind(uid)
            .fetch_optional(pool)
            .await?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibetrackr_common::api::auth::{generate_token, hash_token};
    use vibetrackr_common::db::init_memory_pool;

    fn sample_user() -> User {
        User {
            uid: "user-1".to_string(),
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            created_at: 1_700_000_000,
        }
    }

    #[tokio::test]
    async fn insert_and_lookup_by_token_hash() {
        let pool = init_memory_pool().await.unwrap();
        let token = generate_token();
        let hash = hash_token(&token);

        insert_user(&pool, &sample_user(), &hash).await.unwrap();

        let found = find_user_by_token_hash(&pool, &hash).await.unwrap().unwrap();
        assert_eq!(found.uid, "user-1");
        assert_eq!(found.email, "jo@example.com");

        // The raw token is never a valid lookup key
        assert!(find_user_by_token_hash(&pool, &token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_user_returns_none_for_unknown_uid() {
        let pool = init_memory_pool().await.unwrap();
        assert!(get_user(&pool, "missing").await.unwrap().is_none());
    }
}
