//! Request-level error taxonomy and HTTP mapping.
//!
//! Repos return `sqlx::Error`; handlers convert into `ApiError`, which
//! renders the status code and short JSON body the client sees. Validation
//! failures use a `{"reason": ...}` body, everything else `{"message": ...}`.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A field value failed validation on save.
    #[error("{0}")]
    Validation(String),

    /// The operation would duplicate an existing record.
    #[error("{0}")]
    Conflict(String),

    /// Unsupported verb on an endpoint that handles methods itself.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Anything unexpected; reported as a generic server error.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("record not found".into()),
            other => ApiError::Internal(other.into()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(err) = self {
            log::error!("unhandled error: {err:#}");
        }

        let body = match self {
            ApiError::Validation(reason) => json!({ "reason": reason }),
            other => json!({ "message": other.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
