//! Repository for the `points_transactions` ledger.

use chrono::Utc;
use gurukul_core::error::CoreError;
use gurukul_core::points::{apply_delta, DEFAULT_ADDED_BY};
use gurukul_core::stats::DayBoundary;
use gurukul_core::types::DbId;
use sqlx::PgPool;

use crate::models::points_transaction::{CreatePointsTransaction, PointsTransaction};
use crate::repositories::SystemStatsRepo;

/// Column list for `points_transactions` queries.
const COLUMNS: &str = "id, student_id, points_changed, reason, action, notes, added_by, \
    created_at";

/// Ledger ordering: newest first, `id` breaking ties within one timestamp.
const NEWEST_FIRST: &str = "ORDER BY created_at DESC, id DESC";

/// What [`PointsTransactionRepo::record`] did.
#[derive(Debug)]
pub enum RecordOutcome {
    /// Ledger row written and the student's total updated.
    Recorded(PointsTransaction),
    /// No student with the given id; nothing was written.
    StudentNotFound,
    /// The change was refused (e.g. the total would leave the `i32` range);
    /// nothing was written.
    Rejected(CoreError),
}

impl RecordOutcome {
    /// The recorded transaction, if any.
    pub fn into_recorded(self) -> Option<PointsTransaction> {
        match self {
            RecordOutcome::Recorded(tx) => Some(tx),
            _ => None,
        }
    }
}

/// Provides insert and listing operations for the points ledger.
pub struct PointsTransactionRepo;

impl PointsTransactionRepo {
    /// Record a point change and apply it to the student's running total.
    ///
    /// In one database transaction: lock the student row, check the new
    /// total, insert the ledger entry, write the new total and its grade, and
    /// recompute the stats snapshot. The ledger and the balance therefore
    /// never diverge.
    ///
    /// A missing student or a refused change rolls back without writing.
    pub async fn record(
        pool: &PgPool,
        input: &CreatePointsTransaction,
        boundary: DayBoundary,
    ) -> Result<RecordOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current: Option<i32> =
            sqlx::query_scalar("SELECT points FROM students WHERE id = $1 FOR UPDATE")
                .bind(input.student_id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(current) = current else {
            tx.rollback().await?;
            return Ok(RecordOutcome::StudentNotFound);
        };

        let change = match apply_delta(current, input.points_changed) {
            Ok(change) => change,
            Err(err) => {
                tx.rollback().await?;
                return Ok(RecordOutcome::Rejected(err));
            }
        };

        let insert_query = format!(
            "INSERT INTO points_transactions \
                (student_id, points_changed, reason, action, notes, added_by) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let transaction = sqlx::query_as::<_, PointsTransaction>(&insert_query)
            .bind(input.student_id)
            .bind(input.points_changed)
            .bind(&input.reason)
            .bind(&input.action)
            .bind(input.notes.as_deref())
            .bind(input.added_by.as_deref().unwrap_or(DEFAULT_ADDED_BY))
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE students SET points = $2, grade = $3 WHERE id = $1")
            .bind(input.student_id)
            .bind(change.new_total)
            .bind(change.grade.as_str())
            .execute(&mut *tx)
            .await?;

        SystemStatsRepo::recompute_in(&mut *tx, boundary.start_of_day(Utc::now())).await?;
        tx.commit().await?;

        tracing::debug!(
            student_id = input.student_id,
            previous = current,
            new_total = change.new_total,
            grade = %change.grade,
            "Student points updated",
        );
        Ok(RecordOutcome::Recorded(transaction))
    }

    /// One student's ledger, newest first.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<PointsTransaction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM points_transactions WHERE student_id = $1 {NEWEST_FIRST}"
        );
        sqlx::query_as::<_, PointsTransaction>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// The whole ledger, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<PointsTransaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM points_transactions {NEWEST_FIRST}");
        sqlx::query_as::<_, PointsTransaction>(&query)
            .fetch_all(pool)
            .await
    }

    /// The `limit` most recent ledger entries.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<PointsTransaction>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM points_transactions {NEWEST_FIRST} LIMIT $1");
        sqlx::query_as::<_, PointsTransaction>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
