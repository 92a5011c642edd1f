use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use jsoncmp_diff::DiffError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DocumentNotFound(_) => StatusCode::NOT_FOUND,
            Self::Diff(DiffError::MalformedInput(_) | DiffError::DepthExceeded { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Diff(DiffError::Io { .. })
            | Self::Config(_)
            | Self::Io(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
