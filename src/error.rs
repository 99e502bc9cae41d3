//! Error types for patternbook

use thiserror::Error;

use crate::syntax::MarkupError;

/// Result type alias for patternbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Crate error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No such pattern: {0}")]
    UnknownPattern(String),

    #[error("Config error in {path}: {message}")]
    Config { path: String, message: String },

    #[error("Invalid markup: {0}")]
    Markup(#[from] MarkupError),

    #[error("{0}")]
    Usage(String),
}
