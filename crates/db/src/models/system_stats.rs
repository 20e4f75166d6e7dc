//! Aggregate stats snapshot and report rows.

use gurukul_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// The `system_stats` snapshot row. Fully recomputed on every refresh.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    pub id: DbId,
    pub total_students: i64,
    pub active_students: i64,
    pub total_points: i64,
    /// Transactions recorded since the start of the current stats day.
    pub today_actions: i64,
    pub last_updated: Timestamp,
}

/// Per-floor roll-up for the floor-wise report.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorSummary {
    pub floor: String,
    pub total_students: i64,
    pub active_students: i64,
    pub total_points: i64,
    /// Mean points per student, rounded to two decimals.
    pub average_points: f64,
}
