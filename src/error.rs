//! Error types for autopgp operations.

use thiserror::Error;

/// Result type alias for autopgp operations.
pub type Result<T> = std::result::Result<T, AutopgpError>;

/// Main error type for autopgp operations.
#[derive(Error, Debug)]
pub enum AutopgpError {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Armor decoding errors (malformed envelope, wrong block type)
    #[error("Armor error: {0}")]
    Armor(String),

    /// Key parsing or selection errors
    #[error("Key error: {0}")]
    Key(String),

    /// Encryption stream errors
    #[error("Cryptographic error: {0}")]
    Crypto(String),

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AutopgpError {
    /// Creates a new armor error.
    pub fn armor<T: ToString>(msg: T) -> Self {
        Self::Armor(msg.to_string())
    }

    /// Creates a new key error.
    pub fn key<T: ToString>(msg: T) -> Self {
        Self::Key(msg.to_string())
    }

    /// Creates a new cryptographic error.
    pub fn crypto<T: ToString>(msg: T) -> Self {
        Self::Crypto(msg.to_string())
    }

    /// Creates a new invalid input error.
    pub fn invalid_input<T: ToString>(msg: T) -> Self {
        Self::InvalidInput(msg.to_string())
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_at(path: &std::path::Path, err: std::io::Error) -> Self {
        Self::Io(std::io::Error::new(
            err.kind(),
            format!("{}: {}", path.display(), err),
        ))
    }
}
