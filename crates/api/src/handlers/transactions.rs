//! Read-only views over the points ledger.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use gurukul_core::types::DbId;
use gurukul_db::repositories::PointsTransactionRepo;

use crate::error::AppResult;
use crate::extract::ApiPath;
use crate::query::{LimitParams, DEFAULT_RECENT_TRANSACTIONS};
use crate::state::AppState;

/// GET /api/transactions
pub async fn list_transactions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let transactions = PointsTransactionRepo::list_all(&state.pool).await?;
    Ok(Json(transactions))
}

/// GET /api/transactions/recent?limit=
pub async fn list_recent_transactions(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.resolve(DEFAULT_RECENT_TRANSACTIONS);
    let transactions = PointsTransactionRepo::list_recent(&state.pool, limit).await?;
    Ok(Json(transactions))
}

/// GET /api/students/{id}/transactions
///
/// An unknown student simply has an empty ledger.
pub async fn list_student_transactions(
    State(state): State<AppState>,
    ApiPath(student_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let transactions = PointsTransactionRepo::list_for_student(&state.pool, student_id).await?;
    Ok(Json(transactions))
}
