//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
    #[error("unknown store kind: {0}")]
    UnknownStore(String),
    #[error("invalid schema identifier: {0}")]
    InvalidSchema(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("store: {0}")]
    Store(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Client errors carry no body; only server-side failures get the envelope.
        let (status, code) = match &self {
            AppError::NotFound(_) => return StatusCode::NOT_FOUND.into_response(),
            AppError::Validation(_) | AppError::BadRequest(_) => {
                return StatusCode::BAD_REQUEST.into_response()
            }
            AppError::PayloadTooLarge => return StatusCode::PAYLOAD_TOO_LARGE.into_response(),
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "store_error"),
            AppError::Db(e) => {
                if let sqlx::Error::RowNotFound = e {
                    return StatusCode::NOT_FOUND.into_response();
                }
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
            }
        };
        tracing::error!(error = %self, "request failed");
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bare_status() {
        let r = AppError::NotFound("7".into()).into_response();
        assert_eq!(r.status(), StatusCode::NOT_FOUND);
        let r = AppError::Validation("name must not be blank".into()).into_response();
        assert_eq!(r.status(), StatusCode::BAD_REQUEST);
        let r = AppError::BadRequest("invalid id".into()).into_response();
        assert_eq!(r.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn row_not_found_is_404() {
        let r = AppError::Db(sqlx::Error::RowNotFound).into_response();
        assert_eq!(r.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_errors_are_500_with_envelope() {
        let r = AppError::Store("insert returned no row".into()).into_response();
        assert_eq!(r.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(r.headers().get("content-type").is_some());
    }

    #[test]
    fn other_db_errors_are_500() {
        let r = AppError::Db(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(r.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
