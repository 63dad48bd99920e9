//! Custom error types for the frontend service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::ValidationError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::form::FormError;

/// Custom error type for the frontend service
///
/// A resource the backend does not have is not an error: loaders report it
/// as `None` and the route redirects home.
#[derive(Error, Debug)]
pub enum FrontendError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The backend answered with a payload of the wrong shape
    #[error("Payload from {url} does not match the expected shape: {source}")]
    ShapeViolation {
        url: String,
        #[source]
        source: ValidationError,
    },

    /// A rich-text document that could not be parsed
    #[error("Invalid rich-text document in {field}: {source}")]
    InvalidDocument {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The submitted form does not describe a valid payload
    #[error("Invalid form submission: {0}")]
    InvalidForm(#[from] FormError),

    /// The backend refused a mutation
    #[error("Backend rejected {url} with status {status}")]
    BackendRejected { url: String, status: StatusCode },

    /// The backend could not be reached during a mutation
    #[error("Backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl FrontendError {
    fn status_code(&self) -> StatusCode {
        match self {
            FrontendError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FrontendError::InvalidForm(_) => StatusCode::UNPROCESSABLE_ENTITY,
            FrontendError::ShapeViolation { .. }
            | FrontendError::InvalidDocument { .. }
            | FrontendError::BackendRejected { .. }
            | FrontendError::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for FrontendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Type alias for frontend results
pub type FrontendResult<T> = Result<T, FrontendError>;
