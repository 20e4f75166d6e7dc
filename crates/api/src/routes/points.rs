use axum::routing::{get, post};
use axum::Router;

use crate::handlers::points;
use crate::state::AppState;

/// Points routes mounted at `/points`.
///
/// ```text
/// POST   /          -> record_points
/// GET    /reasons   -> list_reasons
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(points::record_points))
        .route("/reasons", get(points::list_reasons))
}
