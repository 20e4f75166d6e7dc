//! Points ledger models and DTOs.

use gurukul_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `points_transactions` table. Never updated once written.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsTransaction {
    pub id: DbId,
    /// Internal id of the student the change applies to.
    pub student_id: DbId,
    /// Signed, non-zero delta.
    pub points_changed: i32,
    pub reason: String,
    pub action: String,
    pub notes: Option<String>,
    pub added_by: String,
    pub created_at: Timestamp,
}

/// DTO for recording a point award or deduction.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePointsTransaction {
    pub student_id: DbId,
    pub points_changed: i32,
    #[validate(length(min = 1, max = 255))]
    pub reason: String,
    #[validate(length(min = 1, max = 50))]
    pub action: String,
    pub notes: Option<String>,
    /// Who performed the change. Defaults to `"Admin"`.
    #[validate(length(min = 1, max = 100))]
    pub added_by: Option<String>,
}
