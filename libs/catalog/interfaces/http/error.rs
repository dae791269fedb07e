use crate::application::query::QueryError;
use crate::infrastructure::store::StoreError;
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Error returned by HTTP handlers, rendered as `{"error": CODE, "message": text}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        let message = err.to_string();
        match err {
            QueryError::InvalidPageSize(_) | QueryError::InvalidPage | QueryError::MissingKey => {
                ApiError::BadRequest(message)
            }
            QueryError::Store(StoreError::OutOfRange { .. }) => ApiError::OutOfRange(message),
            QueryError::Store(StoreError::NotFound(_)) => ApiError::NotFound(message),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST"),
            ApiError::OutOfRange(msg) => (StatusCode::BAD_REQUEST, msg, "OUT_OF_RANGE"),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND"),
        };

        let body = Json(json!({
            "error": code,
            "message": message
        }));

        (status, body).into_response()
    }
}
