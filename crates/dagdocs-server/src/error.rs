//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dagdocs_site::PageError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Namespace in the URL is not known.
    #[error("Unknown namespace: {0}")]
    UnknownNamespace(String),

    /// Page not found at the given path.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Content source failed for a resolved page.
    #[error("Content error: {0}")]
    Content(String),
}

impl From<PageError> for ServerError {
    fn from(err: PageError) -> Self {
        match err {
            PageError::UnknownNamespace(name) => Self::UnknownNamespace(name),
            PageError::NotFound(path) => Self::PageNotFound(path),
            PageError::Content(e) => Self::Content(e.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::UnknownNamespace(name) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Unknown namespace", "namespace": name}),
            ),
            Self::PageNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "path": path}),
            ),
            Self::Content(message) => {
                tracing::error!(error = %message, "Failed to load page content");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": message}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
