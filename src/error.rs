//! Error types for termsmith.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`TermsmithError`] enum. Most of the reformation pipeline never fails:
//! malformed input degrades to empty or pass-through results, and missing
//! resources are logged and replaced by empty structures. Errors are reserved
//! for I/O surfaced through explicit calls and for caller contract violations.
//!
//! # Examples
//!
//! ```
//! use termsmith::error::{Result, TermsmithError};
//!
//! fn check_limit(limit: usize) -> Result<usize> {
//!     if limit == 0 {
//!         return Err(TermsmithError::invalid_argument("limit must be positive"));
//!     }
//!     Ok(limit)
//! }
//!
//! assert!(check_limit(0).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for termsmith operations.
#[derive(Error, Debug)]
pub enum TermsmithError {
    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (tokenization, filtering).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Storage-related errors (matrix persistence, resource files).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid configuration values.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A caller passed an argument violating the operation's contract.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with [`TermsmithError`].
pub type Result<T> = std::result::Result<T, TermsmithError>;

impl TermsmithError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TermsmithError::Analysis(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        TermsmithError::Storage(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TermsmithError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TermsmithError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TermsmithError::Other(msg.into())
    }
}
