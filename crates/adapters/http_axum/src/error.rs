//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use shelf_domain::error::ShelfError;

/// JSON error body returned by every endpoint.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Request input that axum could not bind (bad path segment, query or body).
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error(transparent)]
    Path(#[from] PathRejection),

    #[error(transparent)]
    Query(#[from] QueryRejection),

    #[error(transparent)]
    Json(#[from] JsonRejection),
}

impl BindingError {
    fn body_text(&self) -> String {
        match self {
            Self::Path(rejection) => rejection.body_text(),
            Self::Query(rejection) => rejection.body_text(),
            Self::Json(rejection) => rejection.body_text(),
        }
    }
}

/// Maps [`ShelfError`] and extractor rejections to an HTTP response with
/// appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    Domain(ShelfError),
    Binding(BindingError),
}

impl From<ShelfError> for ApiError {
    fn from(err: ShelfError) -> Self {
        Self::Domain(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Binding(rejection.into())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Binding(rejection.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Binding(rejection.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Binding(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.body_text()),
            Self::Domain(ShelfError::Validation(err)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            Self::Domain(ShelfError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(ShelfError::Conflict(err)) => (StatusCode::CONFLICT, err.to_string()),
            Self::Domain(ShelfError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { detail: message })).into_response()
    }
}
