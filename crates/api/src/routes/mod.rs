pub mod health;
pub mod points;
pub mod reports;
pub mod students;
pub mod transactions;

use axum::extract::OriginalUri;
use axum::routing::get;
use axum::Router;
use gurukul_core::error::CoreError;

use crate::error::AppError;
use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /students                                        list (filters), create
/// /students/search                                 substring search
/// /students/by-external-id/{external_id}           lookup by display id
/// /students/{id}                                   get, update, delete
/// /students/{id}/transactions                      one student's ledger
///
/// /points                                          record a points change
/// /points/reasons                                  reason catalog
///
/// /transactions                                    full ledger
/// /transactions/recent                             newest N
///
/// /stats                                           dashboard totals
/// /rankings                                        leaderboard
/// /activity                                        recent activity
///
/// /reports/grades                                  grade distribution
/// /reports/floors                                  per-floor summary
/// ```
///
/// Unknown paths under `/api` answer with a JSON 404 and never reach the
/// dashboard asset fallback.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/students", students::router())
        .nest("/points", points::router())
        .nest("/transactions", transactions::router())
        .nest("/reports", reports::router())
        .route("/stats", get(handlers::stats::get_stats))
        .route("/rankings", get(handlers::rankings::get_rankings))
        .route("/activity", get(handlers::activity::list_recent_activity))
        .fallback(api_not_found)
}

async fn api_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::Core(CoreError::NotFoundByKey {
        entity: "Route",
        key: uri.path().to_string(),
    })
}
