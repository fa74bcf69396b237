use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// Reasons a dataset file could not be used
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("error reading dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("error parsing dataset json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid dataset: {0}")]
    Invalid(String),
}

/// Errors returned by the HTTP handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        };

        let body = json!({
            "error": self.to_string(),
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(err: QueryRejection) -> Self {
        ApiError::Validation(err.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(err: PathRejection) -> Self {
        ApiError::Validation(err.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        ApiError::Validation(err.body_text())
    }
}
