use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use gurukul_core::reports::grade_distribution;
use gurukul_db::repositories::StudentRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/reports/grades
///
/// Students per grade, all five grades present.
pub async fn get_grade_distribution(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let counts = StudentRepo::grade_counts(&state.pool).await?;
    Ok(Json(grade_distribution(counts)))
}

/// GET /api/reports/floors
pub async fn get_floor_summaries(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let floors = StudentRepo::floor_summaries(&state.pool).await?;
    Ok(Json(floors))
}
