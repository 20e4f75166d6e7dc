//! Repository for the append-only `activity_logs` table.

use sqlx::PgPool;

use crate::models::activity_log::{ActivityLog, CreateActivityLog};

/// Column list for `activity_logs` queries.
const COLUMNS: &str = "id, student_id, action, description, created_at";

/// Provides append and recent-listing operations for activity entries.
pub struct ActivityLogRepo;

impl ActivityLogRepo {
    /// Append one activity entry.
    pub async fn create(
        pool: &PgPool,
        input: &CreateActivityLog,
    ) -> Result<ActivityLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO activity_logs (student_id, action, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActivityLog>(&query)
            .bind(input.student_id)
            .bind(&input.action)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// The `limit` most recent entries, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<ActivityLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activity_logs ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, ActivityLog>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
