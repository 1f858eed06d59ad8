//! Error types for the agent task client.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when using the agent task client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The remote reports no such resource.
    #[error("not found: {0}")]
    NotFound(String),

    /// Non-success transport response.
    #[error("remote error (HTTP {status}): {message}")]
    Remote { status: u16, message: String },

    /// Operation rejected due to entity lifecycle, e.g. stepping a finished task.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A local file required for the operation does not exist.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Local file I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Client configuration is incomplete or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}
