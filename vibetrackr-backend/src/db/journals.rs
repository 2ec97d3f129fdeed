//! Journal queries
//!
//! The analysis column stores the serialized analysis record produced
//! at create/update time. Updates replace the whole row's content and
//! analysis together; the record is never patched field by field.

use sqlx::SqlitePool;
use vibetrackr_common::db::models::Journal;
use vibetrackr_common::Result;

/// Insert a journal entry
pub async fn insert_journal(pool: &SqlitePool, journal: &Journal) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO journals (id, user_uid, title, content, analysis, timestamp, date)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&journal.id)
    .bind(&journal.user_uid)
    .bind(&journal.title)
    .bind(&journal.content)
    .bind(&journal.analysis)
    .bind(journal.timestamp)
    .bind(&journal.date)
    .execute(pool)
    .await?;
    Ok(())
}

/// List a user's journals, newest first
pub async fn list_journals(pool: &SqlitePool, user_uid: &str) -> Result<Vec<Journal>> {
    let journals = sqlx::query_as::<_, Journal>(
        r#"
        SELECT id, user_uid, title, content, analysis, timestamp, date
        FROM journals WHERE user_uid = ?
        ORDER BY timestamp DESC
        "#,
    )
    .bind(user_uid)
    .fetch_all(pool)
    .await?;
    Ok(journals)
}

/// Fetch one journal, scoped to its owner
pub async fn get_journal(pool: &SqlitePool, user_uid: &str, id: &str) -> Result<Option<Journal>> {
    let journal = sqlx::query_as::<_, Journal>(
        r#"
        SELECT id, user_uid, title, content, analysis, timestamp, date
        FROM journals WHERE user_uid = ? AND id = ?
        "#,
    )
    .bind(user_uid)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(journal)
}

/// Replace a journal's content and analysis wholesale
pub async fn update_journal(pool: &SqlitePool, journal: &Journal) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE journals
        SET title = ?, content = ?, analysis = ?, timestamp = ?, date = ?
        WHERE user_uid = ? AND id = ?
        "#,
    )
    .bind(&journal.title)
    .bind(&journal.content)
    .bind(&journal.analysis)
    .bind(journal.timestamp)
    .bind(&journal.date)
    .bind(&journal.user_uid)
    .bind(&journal.id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete a journal, scoped to its owner
pub async fn delete_journal(pool: &SqlitePool, user_uid: &str, id: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM journals WHERE user_uid = ? AND id = ?")
        .bind(user_uid)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibetrackr_common::db::init_memory_pool;
    use vibetrackr_common::db::models::User;

    async fn pool_with_user(uid: &str) -> SqlitePool {
        let pool = init_memory_pool().await.unwrap();
        let user = User {
            uid: uid.to_string(),
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            created_at: 1_700_000_000,
        };
        crate::db::users::insert_user(&pool, &user, &format!("hash-{}", uid))
            .await
            .unwrap();
        pool
    }

    fn sample_journal(uid: &str, id: &str, timestamp: i64) -> Journal {
        Journal {
            id: id.to_string(),
            user_uid: uid.to_string(),
            title: "Today".to_string(),
            content: "Feeling good".to_string(),
            analysis: Some(r#"{"Emotion":"Excited"}"#.to_string()),
            timestamp,
            date: "2026-08-06".to_string(),
        }
    }

    #[tokio::test]
    async fn list_orders_newest_first() {
        let pool = pool_with_user("u1").await;
        insert_journal(&pool, &sample_journal("u1", "a", 100)).await.unwrap();
        insert_journal(&pool, &sample_journal("u1", "b", 300)).await.unwrap();
        insert_journal(&pool, &sample_journal("u1", "c", 200)).await.unwrap();

        let journals = list_journals(&pool, "u1").await.unwrap();
        let ids: Vec<&str> = journals.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[tokio::test]
    async fn get_is_scoped_to_owner() {
        let pool = pool_with_user("u1").await;
        insert_journal(&pool, &sample_journal("u1", "a", 100)).await.unwrap();

        assert!(get_journal(&pool, "u1", "a").await.unwrap().is_some());
        assert!(get_journal(&pool, "someone-else", "a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_content_and_analysis() {
        let pool = pool_with_user("u1").await;
        insert_journal(&pool, &sample_journal("u1", "a", 100)).await.unwrap();

        let mut updated = sample_journal("u1", "a", 500);
        updated.content = "Rough day".to_string();
        updated.analysis = Some(r#"{"Emotion":"Sad"}"#.to_string());
        assert!(update_journal(&pool, &updated).await.unwrap());

        let journal = get_journal(&pool, "u1", "a").await.unwrap().unwrap();
        assert_eq!(journal.content, "Rough day");
        assert_eq!(journal.timestamp, 500);
        assert!(journal.analysis.unwrap().contains("Sad"));
    }

    #[tokio::test]
    async fn update_of_missing_journal_reports_no_rows() {
        let pool = pool_with_user("u1").await;
        assert!(!update_journal(&pool, &sample_journal("u1", "ghost", 1)).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_row_once() {
        let pool = pool_with_user("u1").await;
        insert_journal(&pool, &sample_journal("u1", "a", 100)).await.unwrap();

        assert!(delete_journal(&pool, "u1", "a").await.unwrap());
        assert!(!delete_journal(&pool, "u1", "a").await.unwrap());
        assert!(list_journals(&pool, "u1").await.unwrap().is_empty());
    }
}
