//! Repository for the `system_stats` snapshot.
//!
//! The snapshot is never updated incrementally: every refresh recomputes all
//! counters from `students` and `points_transactions` in one statement and
//! rewrites the first row (inserting it when the table is empty).

use chrono::Utc;
use gurukul_core::stats::DayBoundary;
use gurukul_core::types::Timestamp;
use sqlx::{PgConnection, PgPool};

use crate::models::system_stats::SystemStats;

/// Column list for `system_stats` queries.
const COLUMNS: &str = "id, total_students, active_students, total_points, today_actions, \
    updated_at AS last_updated";

/// Provides read and recompute operations for the stats snapshot.
pub struct SystemStatsRepo;

impl SystemStatsRepo {
    /// Read the current snapshot, computing it first if no row exists yet.
    pub async fn get(pool: &PgPool, boundary: DayBoundary) -> Result<SystemStats, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM system_stats ORDER BY id LIMIT 1");
        let existing = sqlx::query_as::<_, SystemStats>(&query)
            .fetch_optional(pool)
            .await?;

        match existing {
            Some(stats) => Ok(stats),
            None => Self::refresh(pool, boundary).await,
        }
    }

    /// Force a full recompute on its own connection.
    pub async fn refresh(pool: &PgPool, boundary: DayBoundary) -> Result<SystemStats, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::recompute_in(&mut *conn, boundary.start_of_day(Utc::now())).await
    }

    /// Recompute the snapshot on an existing connection or transaction.
    ///
    /// `day_start` is the instant from which `today_actions` counts ledger rows.
    pub(crate) async fn recompute_in(
        conn: &mut PgConnection,
        day_start: Timestamp,
    ) -> Result<SystemStats, sqlx::Error> {
        let query = format!(
            "WITH agg AS ( \
                 SELECT COUNT(*)::BIGINT AS total_students, \
                        COUNT(*) FILTER (WHERE active)::BIGINT AS active_students, \
                        COALESCE(SUM(points), 0)::BIGINT AS total_points \
                 FROM students \
             ), today AS ( \
                 SELECT COUNT(*)::BIGINT AS today_actions \
                 FROM points_transactions WHERE created_at >= $1 \
             ), target AS ( \
                 SELECT id FROM system_stats ORDER BY id LIMIT 1 \
             ), updated AS ( \
                 UPDATE system_stats s SET \
                     total_students = agg.total_students, \
                     active_students = agg.active_students, \
                     total_points = agg.total_points, \
                     today_actions = today.today_actions \
                 FROM agg, today \
                 WHERE s.id = (SELECT id FROM target) \
                 RETURNING s.* \
             ), inserted AS ( \
                 INSERT INTO system_stats \
                     (total_students, active_students, total_points, today_actions) \
                 SELECT agg.total_students, agg.active_students, agg.total_points, \
                        today.today_actions \
                 FROM agg, today \
                 WHERE NOT EXISTS (SELECT 1 FROM target) \
                 RETURNING * \
             ) \
             SELECT {COLUMNS} FROM updated \
             UNION ALL \
             SELECT {COLUMNS} FROM inserted"
        );
        let stats = sqlx::query_as::<_, SystemStats>(&query)
            .bind(day_start)
            .fetch_one(&mut *conn)
            .await?;

        tracing::debug!(
            total_students = stats.total_students,
            active_students = stats.active_students,
            total_points = stats.total_points,
            today_actions = stats.today_actions,
            "System stats recomputed"
        );
        Ok(stats)
    }
}
