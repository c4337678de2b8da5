//! Error types for the movie catalog.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the movie catalog.
#[derive(Error, Debug)]
pub enum Error {
    // Catalog errors
    #[error("Movie not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Catalog service unavailable: {0}")]
    TransientFetchFailure(String),

    #[error("Invalid movie record: {0}")]
    ValidationFailure(String),

    // Config errors
    #[error("Invalid config file: {0}")]
    Config(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create a validation error from a string.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::ValidationFailure(msg.into())
    }

    /// Whether a user-initiated retry may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::TransientFetchFailure(_) | Error::Http(_))
    }
}
