use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Report routes mounted at `/reports`.
///
/// ```text
/// GET    /grades    -> get_grade_distribution
/// GET    /floors    -> get_floor_summaries
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/grades", get(reports::get_grade_distribution))
        .route("/floors", get(reports::get_floor_summaries))
}
