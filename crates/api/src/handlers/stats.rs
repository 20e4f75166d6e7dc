use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use gurukul_db::repositories::SystemStatsRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
///
/// Dashboard totals. The snapshot row is created on first read.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = SystemStatsRepo::get(&state.pool, state.day_boundary()).await?;
    Ok(Json(stats))
}
