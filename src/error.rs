//! Error types for the data client, the section renderers and the HTTP surface.
//!
//! - [`ClientError`] - a request to the portfolio API failed
//! - [`SectionError`] - a section renderer could not fill its region
//! - [`AppError`] - an HTTP handler failed; rendered as a JSON error body

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reqwest::StatusCode as UpstreamStatus;
use serde::Serialize;
use serde_json::{Value, json};

/// A call to the portfolio API did not produce a usable response.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The API answered with a non-2xx status.
    #[error("HTTP error! status: {status} ({path})")]
    Status {
        path: String,
        status: UpstreamStatus,
    },

    /// The request could not be completed (DNS, connection, TLS, ...).
    #[error("Request to {path} failed: {source}")]
    Network {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not JSON or did not match the expected record shape.
    #[error("Unexpected response body from {path}: {reason}")]
    Decode { path: String, reason: String },
}

impl ClientError {
    /// Resource path of the failed request.
    pub fn path(&self) -> &str {
        match self {
            Self::Status { path, .. } | Self::Network { path, .. } | Self::Decode { path, .. } => {
                path
            }
        }
    }
}

/// Failure inside a section renderer. Never leaves the renderer.
#[derive(Debug, thiserror::Error)]
pub enum SectionError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Error returned by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let (status, code, details) = match &self {
            AppError::Render(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "render_error",
                json!({ "reason": e.to_string() }),
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message: self.to_string(),
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_exposes_path() {
        let err = ClientError::Status {
            path: "/experience".to_string(),
            status: UpstreamStatus::INTERNAL_SERVER_ERROR,
        };

        assert_eq!(err.path(), "/experience");
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_section_error_wraps_client_error() {
        let err: SectionError = ClientError::Decode {
            path: "/skill".to_string(),
            reason: "expected an object".to_string(),
        }
        .into();

        assert!(matches!(err, SectionError::Client(_)));
        assert!(err.to_string().contains("/skill"));
    }
}
