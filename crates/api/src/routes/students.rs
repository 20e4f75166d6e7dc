//! Route definitions for the student roster.

use axum::routing::get;
use axum::Router;

use crate::handlers::{students, transactions};
use crate::state::AppState;

/// Student routes mounted at `/students`.
///
/// ```text
/// GET    /                               -> list_students
/// POST   /                               -> create_student
/// GET    /search                         -> search_students
/// GET    /by-external-id/{external_id}   -> get_student_by_external_id
/// GET    /{id}                           -> get_student
/// PUT    /{id}                           -> update_student
/// DELETE /{id}                           -> delete_student
/// GET    /{id}/transactions              -> list_student_transactions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(students::list_students).post(students::create_student),
        )
        .route("/search", get(students::search_students))
        .route(
            "/by-external-id/{external_id}",
            get(students::get_student_by_external_id),
        )
        .route(
            "/{id}",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        )
        .route(
            "/{id}/transactions",
            get(transactions::list_student_transactions),
        )
}
