//! Error types for the AutoNotes client.

use thiserror::Error;

/// Library-level error type for AutoNotes operations.
#[derive(Error, Debug)]
pub enum AutonotesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failure reported by the backend, carrying its `detail` string (or a
    /// status-based fallback when no detail was present).
    #[error("{0}")]
    Backend(String),

    #[error("Cannot connect to the backend server at {0}. Please ensure the backend is running.")]
    BackendUnreachable(String),

    #[error("Session error: {0}")]
    Session(String),

    /// Export cannot proceed, e.g. nothing has been generated yet.
    #[error("{0}")]
    Export(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for AutoNotes operations.
pub type Result<T> = std::result::Result<T, AutonotesError>;
