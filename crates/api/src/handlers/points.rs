//! Handlers for recording points changes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gurukul_core::error::CoreError;
use gurukul_core::points::{
    activity_description, reason_catalog, validate_delta, ACTIVITY_POINTS_UPDATED,
};
use gurukul_db::models::activity_log::CreateActivityLog;
use gurukul_db::models::points_transaction::CreatePointsTransaction;
use gurukul_db::repositories::{ActivityLogRepo, PointsTransactionRepo, RecordOutcome};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /api/points
///
/// Records the ledger row and the new balance atomically, then appends an
/// activity entry describing the change. A change that would push the total
/// outside the `i32` range is refused with 400.
pub async fn record_points(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePointsTransaction>,
) -> AppResult<impl IntoResponse> {
    validate_delta(input.points_changed)?;

    let outcome = PointsTransactionRepo::record(&state.pool, &input, state.day_boundary()).await?;
    let transaction = match outcome {
        RecordOutcome::Recorded(transaction) => transaction,
        RecordOutcome::StudentNotFound => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Student",
                id: input.student_id,
            }))
        }
        RecordOutcome::Rejected(err) => return Err(err.into()),
    };

    ActivityLogRepo::create(
        &state.pool,
        &CreateActivityLog {
            student_id: Some(input.student_id),
            action: ACTIVITY_POINTS_UPDATED.to_string(),
            description: activity_description(input.points_changed, &input.reason),
        },
    )
    .await?;

    tracing::info!(
        transaction_id = transaction.id,
        student_id = transaction.student_id,
        points_changed = transaction.points_changed,
        added_by = %transaction.added_by,
        "Points recorded"
    );

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// GET /api/points/reasons
///
/// The advisory award and deduction presets shown by the points form.
pub async fn list_reasons() -> impl IntoResponse {
    Json(reason_catalog())
}
