// In crates/web-server/src/error.rs

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::types::ErrorResponse;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to bind the server address: {0}")]
    ServerBindError(#[source] std::io::Error),

    #[error("Server terminated with an error: {0}")]
    ServeError(#[source] std::io::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] JsonRejection),
}

pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::InvalidRequest(rejection) => rejection.status(),
            Error::ServerBindError(_) | Error::ServeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            Error::InvalidRequest(rejection) => rejection.body_text(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(%status, reason = %message, "Request failed.");
        } else {
            tracing::warn!(%status, reason = %message, "Request rejected.");
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
