//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. "No matching row" is returned as
//! `None` / `false`; only store faults surface as `sqlx::Error`.

pub mod activity_log_repo;
pub mod points_transaction_repo;
pub mod student_repo;
pub mod system_stats_repo;

pub use activity_log_repo::ActivityLogRepo;
pub use points_transaction_repo::{PointsTransactionRepo, RecordOutcome};
pub use student_repo::StudentRepo;
pub use system_stats_repo::SystemStatsRepo;
