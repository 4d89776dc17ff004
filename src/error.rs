//! Error types
//!
//! The distance and verification hot paths never fail: they trust their
//! inputs. Only dictionary loading and the validating wrappers in
//! [`crate::checked`] report errors.

use thiserror::Error;

/// Errors that can occur outside the trusted hot path
#[derive(Error, Debug)]
pub enum SymlarError {
    /// The pronunciation dictionary could not be read
    #[error("failed to read pronunciation dictionary: {0}")]
    Io(#[from] std::io::Error),

    /// The pronunciation dictionary is not valid JSON of the expected shape
    #[error("malformed pronunciation dictionary: {0}")]
    Dictionary(#[from] serde_json::Error),

    /// A threshold or cost bound is out of range
    #[error("{0}")]
    Validation(String),
}

pub type Result<T, E = SymlarError> = std::result::Result<T, E>;
