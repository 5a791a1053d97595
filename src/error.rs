//! Unified error types for the artha.bot backend.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Unified error type for service startup and wiring.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Prometheus exporter could not be installed.
    #[error("metrics exporter error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while answering the frontend shell fallback.
#[derive(Error, Debug)]
pub enum FrontendError {
    /// The static root exists but holds no `index.html`.
    #[error("Frontend not built")]
    NotBuilt,

    /// `index.html` exists but could not be read.
    #[error("failed to read frontend shell: {0}")]
    Read(#[source] std::io::Error),
}

/// JSON body for request-scoped errors.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human readable reason.
    pub error: String,
}

impl FrontendError {
    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotBuilt => StatusCode::SERVICE_UNAVAILABLE,
            Self::Read(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FrontendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Self::Read(ref e) = self {
            error!("Failed to read index.html: {}", e);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
