//! Student roster models and DTOs.

use gurukul_core::roster::RosterEntry;
use gurukul_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: DbId,
    /// Caller-assigned display id, unique across the roster.
    pub external_id: String,
    pub name: String,
    pub room: String,
    pub floor: String,
    pub points: i32,
    /// Threshold grade of `points` (`A+`, `A`, `B`, `C` or `D`).
    pub grade: String,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl RosterEntry for Student {
    fn external_id(&self) -> &str {
        &self.external_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn room(&self) -> &str {
        &self.room
    }

    fn floor(&self) -> &str {
        &self.floor
    }

    fn grade(&self) -> &str {
        &self.grade
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a student.
///
/// `grade` is accepted for compatibility with older clients but the stored
/// grade is always derived from `points`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudent {
    #[validate(length(min = 1, max = 10))]
    pub external_id: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 20))]
    pub room: String,
    #[validate(length(min = 1, max = 5))]
    pub floor: String,
    pub points: Option<i32>,
    pub grade: Option<String>,
    pub active: Option<bool>,
}

/// DTO for a partial student update. Only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudent {
    #[validate(length(min = 1, max = 10))]
    pub external_id: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub room: Option<String>,
    #[validate(length(min = 1, max = 5))]
    pub floor: Option<String>,
    pub points: Option<i32>,
    pub grade: Option<String>,
    pub active: Option<bool>,
}
