//! Handlers for the student roster.
//!
//! Writes go through [`ValidatedJson`] so malformed payloads never reach the
//! store. The stored grade is always derived from points; a client-sent
//! `grade` only has to be a recognised label.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gurukul_core::error::CoreError;
use gurukul_core::grading::Grade;
use gurukul_core::roster::{validate_query, RosterFilter};
use gurukul_core::types::DbId;
use gurukul_db::models::student::{CreateStudent, UpdateStudent};
use gurukul_db::repositories::StudentRepo;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::query::{SearchParams, StudentListParams};
use crate::state::AppState;

const ENTITY: &str = "Student";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// GET /api/students
///
/// Full roster by points descending, optionally narrowed by floor, grade or
/// active status.
pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<StudentListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = RosterFilter::from_params(
        params.floor.as_deref(),
        params.grade.as_deref(),
        params.active,
    )?;
    let students = StudentRepo::list_all(&state.pool).await?;

    Ok(Json(filter.apply(students)))
}

/// GET /api/students/search?q=
pub async fn search_students(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let query = validate_query(params.q.as_deref()).map_err(|_| {
        AppError::BadRequest("Search query is required".into())
    })?;
    let students = StudentRepo::search(&state.pool, query).await?;

    Ok(Json(students))
}

/// GET /api/students/{id}
pub async fn get_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(student))
}

/// GET /api/students/by-external-id/{externalId}
pub async fn get_student_by_external_id(
    State(state): State<AppState>,
    ApiPath(external_id): ApiPath<String>,
) -> AppResult<impl IntoResponse> {
    let student = StudentRepo::find_by_external_id(&state.pool, &external_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFoundByKey {
            entity: ENTITY,
            key: external_id,
        }))?;

    Ok(Json(student))
}

/// POST /api/students
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateStudent>,
) -> AppResult<impl IntoResponse> {
    check_grade_label(input.grade.as_deref())?;

    let student = StudentRepo::create(&state.pool, &input, state.day_boundary()).await?;

    tracing::info!(
        student_id = student.id,
        external_id = %student.external_id,
        "Student created"
    );

    Ok((StatusCode::CREATED, Json(student)))
}

/// PUT /api/students/{id}
///
/// Partial update. Supplying `points` re-derives the grade.
pub async fn update_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateStudent>,
) -> AppResult<impl IntoResponse> {
    check_grade_label(input.grade.as_deref())?;

    let student = StudentRepo::update(&state.pool, id, &input, state.day_boundary())
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(student_id = id, "Student updated");

    Ok(Json(student))
}

/// DELETE /api/students/{id}
///
/// Hard delete. The student's ledger goes with it; activity entries stay
/// but lose their link.
pub async fn delete_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = StudentRepo::delete(&state.pool, id, state.day_boundary()).await?;
    if !deleted {
        return Err(not_found(id));
    }

    tracing::info!(student_id = id, "Student deleted");

    Ok(Json(json!({ "message": "Student deleted successfully" })))
}

fn check_grade_label(grade: Option<&str>) -> Result<(), CoreError> {
    grade.map(Grade::parse).transpose().map(|_| ())
}
