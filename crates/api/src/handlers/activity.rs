use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use gurukul_db::repositories::ActivityLogRepo;

use crate::error::AppResult;
use crate::query::{LimitParams, DEFAULT_ACTIVITY};
use crate::state::AppState;

/// GET /api/activity?limit=
pub async fn list_recent_activity(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let entries = ActivityLogRepo::list_recent(&state.pool, params.resolve(DEFAULT_ACTIVITY)).await?;
    Ok(Json(entries))
}
