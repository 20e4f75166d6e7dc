//! Repository for the `students` table.
//!
//! Provides roster CRUD, substring search, the ranking queries and the
//! grade/floor report aggregates. Every mutation that changes the roster
//! recomputes the stats snapshot in the same transaction.

use chrono::Utc;
use gurukul_core::grading::Grade;
use gurukul_core::roster::like_pattern;
use gurukul_core::stats::DayBoundary;
use gurukul_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student, UpdateStudent};
use crate::models::system_stats::FloorSummary;
use crate::repositories::SystemStatsRepo;

/// Column list for `students` queries.
const COLUMNS: &str = "id, external_id, name, room, floor, points, grade, active, \
    created_at, updated_at";

/// Leaderboard ordering. `id` breaks ties so equal totals list in creation order.
const RANKED: &str = "ORDER BY points DESC, id ASC";

/// Provides CRUD, search and ranking operations for students.
pub struct StudentRepo;

impl StudentRepo {
    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// List every student, highest points first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students {RANKED}");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Find a student by internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a student by their caller-assigned display id.
    pub async fn find_by_external_id(
        pool: &PgPool,
        external_id: &str,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE external_id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(external_id)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive substring search over name, external id, room and floor.
    ///
    /// The query is matched literally; `%` and `_` are not wildcards.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM students \
             WHERE name ILIKE $1 OR external_id ILIKE $1 OR room ILIKE $1 OR floor ILIKE $1 \
             {RANKED}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(like_pattern(term))
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Insert a new student and refresh the stats snapshot.
    ///
    /// The stored grade is derived from the initial points (0 when omitted).
    pub async fn create(
        pool: &PgPool,
        input: &CreateStudent,
        boundary: DayBoundary,
    ) -> Result<Student, sqlx::Error> {
        let points = input.points.unwrap_or(0);
        let grade = Grade::for_points(points);

        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO students (external_id, name, room, floor, points, grade, active) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, true)) \
             RETURNING {COLUMNS}"
        );
        let student = sqlx::query_as::<_, Student>(&query)
            .bind(&input.external_id)
            .bind(&input.name)
            .bind(&input.room)
            .bind(&input.floor)
            .bind(points)
            .bind(grade.as_str())
            .bind(input.active)
            .fetch_one(&mut *tx)
            .await?;

        SystemStatsRepo::recompute_in(&mut *tx, boundary.start_of_day(Utc::now())).await?;
        tx.commit().await?;
        Ok(student)
    }

    /// Apply a partial update. Only supplied fields change; `updated_at` is
    /// refreshed by trigger. When `points` is supplied the grade is re-derived.
    ///
    /// Returns `None` if no student with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
        boundary: DayBoundary,
    ) -> Result<Option<Student>, sqlx::Error> {
        let grade = input.points.map(|p| Grade::for_points(p).as_str());

        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE students SET \
                 external_id = COALESCE($2, external_id), \
                 name = COALESCE($3, name), \
                 room = COALESCE($4, room), \
                 floor = COALESCE($5, floor), \
                 points = COALESCE($6, points), \
                 grade = COALESCE($7, grade), \
                 active = COALESCE($8, active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let student = sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(input.external_id.as_deref())
            .bind(input.name.as_deref())
            .bind(input.room.as_deref())
            .bind(input.floor.as_deref())
            .bind(input.points)
            .bind(grade)
            .bind(input.active)
            .fetch_optional(&mut *tx)
            .await?;

        if student.is_some() {
            SystemStatsRepo::recompute_in(&mut *tx, boundary.start_of_day(Utc::now())).await?;
        }
        tx.commit().await?;
        Ok(student)
    }

    /// Hard-delete a student. Their ledger rows go with them; activity entries
    /// keep their text but lose the link.
    ///
    /// Returns `true` if a row was removed. The stats snapshot is only
    /// recomputed when something was actually deleted.
    pub async fn delete(
        pool: &PgPool,
        id: DbId,
        boundary: DayBoundary,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let deleted = result.rows_affected() > 0;

        if deleted {
            SystemStatsRepo::recompute_in(&mut *tx, boundary.start_of_day(Utc::now())).await?;
        }
        tx.commit().await?;
        Ok(deleted)
    }

    // -----------------------------------------------------------------------
    // Rankings
    // -----------------------------------------------------------------------

    /// Top `limit` active students by points.
    pub async fn top_active(pool: &PgPool, limit: i64) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE active {RANKED} LIMIT $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Every student on `floor` (active or not), by points.
    pub async fn list_by_floor(pool: &PgPool, floor: &str) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE floor = $1 {RANKED}");
        sqlx::query_as::<_, Student>(&query)
            .bind(floor)
            .fetch_all(pool)
            .await
    }

    /// Every student holding `grade` (active or not), by points.
    pub async fn list_by_grade(pool: &PgPool, grade: &str) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE grade = $1 {RANKED}");
        sqlx::query_as::<_, Student>(&query)
            .bind(grade)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Reports
    // -----------------------------------------------------------------------

    /// `(grade, count)` for every grade that has at least one student.
    pub async fn grade_counts(pool: &PgPool) -> Result<Vec<(String, i64)>, sqlx::Error> {
        sqlx::query_as::<_, (String, i64)>(
            "SELECT grade, COUNT(*)::BIGINT FROM students GROUP BY grade",
        )
        .fetch_all(pool)
        .await
    }

    /// Per-floor counts, point sums and averages, ordered by floor.
    pub async fn floor_summaries(pool: &PgPool) -> Result<Vec<FloorSummary>, sqlx::Error> {
        sqlx::query_as::<_, FloorSummary>(
            "SELECT floor, \
                    COUNT(*)::BIGINT AS total_students, \
                    COUNT(*) FILTER (WHERE active)::BIGINT AS active_students, \
                    COALESCE(SUM(points), 0)::BIGINT AS total_points, \
                    ROUND(AVG(points)::NUMERIC, 2)::FLOAT8 AS average_points \
             FROM students \
             GROUP BY floor \
             ORDER BY floor",
        )
        .fetch_all(pool)
        .await
    }
}
