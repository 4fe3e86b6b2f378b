//! Errors raised at the host request boundary.

use axum::http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while handling a host request.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The host asked for an operation this plugin does not provide
    #[error("Unhandled request type: {0}")]
    UnhandledRequest(String),

    /// The request body was not valid JSON for the operation
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The view template could not be read
    #[error("{}: {source}", .path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PluginError {
    /// Response code reported to the host for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::UnhandledRequest(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Template { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
