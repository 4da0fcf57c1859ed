pub mod config;
pub mod metrics;
pub mod remediation;
pub mod server;

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Alert at index {index} has no status")]
    MissingStatus { index: usize },
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Execution error: {0}")]
    Execution(String),
    #[error("Internal error: {0}")]
    Internal(String),
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error!("Error handling webhook: {}", self);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_status_names_the_index() {
        let err = Error::MissingStatus { index: 3 };
        assert_eq!(err.to_string(), "Alert at index 3 has no status");
    }

    #[test]
    fn errors_render_as_internal_server_error() {
        let response = Error::Validation("alerts must be an array".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = Error::Internal("metrics were not UTF-8".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
