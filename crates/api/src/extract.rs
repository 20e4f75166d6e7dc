//! Extractors whose rejections render as the JSON error envelope.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use gurukul_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::AppError;

/// JSON body that has been deserialized and validated.
///
/// Unparseable bodies are rejected with `BAD_REQUEST`; rule violations with
/// `VALIDATION_ERROR` naming each offending field (camelCase, as sent).
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateStudent>) -> AppResult<Json<()>> {
///     // every length rule on `CreateStudent` holds here
///     Ok(Json(()))
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| CoreError::Validation(describe_validation_errors(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

/// Path parameters; a malformed segment such as `/api/students/abc` is
/// rejected with `BAD_REQUEST` instead of axum's plain-text response.
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ApiPath(value))
    }
}

/// Render field errors as `"field: problem; field: problem"`, sorted by field.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = camel_case(&field.to_string());
            field_errors
                .iter()
                .map(move |err| format!("{field}: {}", describe(err)))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

fn describe(err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }
    match err.code.as_ref() {
        "length" => match (err.params.get("min"), err.params.get("max")) {
            (Some(min), Some(max)) => format!("length must be between {min} and {max}"),
            (Some(min), None) => format!("length must be at least {min}"),
            (None, Some(max)) => format!("length must be at most {max}"),
            (None, None) => "invalid length".to_string(),
        },
        code => format!("failed {code} check"),
    }
}

fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper = false;
    for c in snake.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
