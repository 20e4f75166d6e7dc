use axum::routing::get;
use axum::Router;

use crate::handlers::transactions;
use crate::state::AppState;

/// Ledger routes mounted at `/transactions`.
///
/// ```text
/// GET    /          -> list_transactions
/// GET    /recent    -> list_recent_transactions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(transactions::list_transactions))
        .route("/recent", get(transactions::list_recent_transactions))
}
