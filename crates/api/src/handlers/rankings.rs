//! Leaderboard handler.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use gurukul_core::roster::normalize_choice;
use gurukul_db::repositories::StudentRepo;

use crate::error::AppResult;
use crate::query::{resolve_limit, RankingParams, DEFAULT_RANKINGS};
use crate::state::AppState;

/// GET /api/rankings?limit=&floor=&grade=
///
/// A floor filter wins over a grade filter; with neither, the top active
/// students are returned. `all` counts as no filter. Floor and grade
/// rankings are not limited.
pub async fn get_rankings(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> AppResult<impl IntoResponse> {
    let students = if let Some(floor) = normalize_choice(params.floor.as_deref()) {
        StudentRepo::list_by_floor(&state.pool, floor).await?
    } else if let Some(grade) = normalize_choice(params.grade.as_deref()) {
        StudentRepo::list_by_grade(&state.pool, grade).await?
    } else {
        let limit = resolve_limit(params.limit.as_deref(), DEFAULT_RANKINGS);
        StudentRepo::top_active(&state.pool, limit).await?
    };

    Ok(Json(students))
}
