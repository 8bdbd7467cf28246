//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ErrorBody;

/// Message returned for any store failure. Driver detail only goes to the log.
pub const STORE_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },
    #[error("invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),
    #[error("CORS_ORIGINS must name at least one origin")]
    NoCorsOrigins,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} parameter is required")]
    MissingParameter(&'static str),
    #[error("invalid {name} parameter: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("store: {0}")]
    Store(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_) | AppError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Store(_) => STORE_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Store(e) = &self {
            tracing::error!(error = %e, "store query failed");
        }
        let status = self.status();
        let body = ErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}
