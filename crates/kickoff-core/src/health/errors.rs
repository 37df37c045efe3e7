//! Health check error types.

use crate::errors::KickoffError;

/// Reasons a health endpoint could not be asked.
///
/// Folded into [`HealthStatus::Unreachable`](super::HealthStatus) before
/// reaching callers.
#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("Invalid health URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to connect to backend: {source}")]
    Connect { source: std::io::Error },

    #[error("HTTP error talking to backend: {source}")]
    Http {
        #[from]
        source: hyper::Error,
    },

    #[error("Failed to build health request: {message}")]
    Request { message: String },

    #[error("Health check timed out after {millis}ms")]
    Timeout { millis: u64 },

    #[error("Failed to start health check runtime: {source}")]
    Runtime { source: std::io::Error },
}

impl KickoffError for HealthError {
    fn error_code(&self) -> &'static str {
        match self {
            HealthError::InvalidUrl { .. } => "HEALTH_INVALID_URL",
            HealthError::Connect { .. } => "HEALTH_CONNECT_FAILED",
            HealthError::Http { .. } => "HEALTH_HTTP_ERROR",
            HealthError::Request { .. } => "HEALTH_REQUEST_INVALID",
            HealthError::Timeout { .. } => "HEALTH_TIMEOUT",
            HealthError::Runtime { .. } => "HEALTH_RUNTIME_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, HealthError::InvalidUrl { .. })
    }
}
