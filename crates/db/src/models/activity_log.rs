//! Activity log models.

use gurukul_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `activity_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: DbId,
    /// Cleared when the student is deleted.
    pub student_id: Option<DbId>,
    pub action: String,
    pub description: String,
    pub created_at: Timestamp,
}

/// Insert payload for an activity entry. Built server-side, never deserialized.
#[derive(Debug, Clone)]
pub struct CreateActivityLog {
    pub student_id: Option<DbId>,
    pub action: String,
    pub description: String,
}
