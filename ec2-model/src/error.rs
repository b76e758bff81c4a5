use thiserror::Error;

/// Errors raised when dispatching over shapes by name.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown shape: {0}")]
    UnknownShape(String),

    #[error("invalid shape JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} is not a request shape")]
    NotARequest(String),
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
