//! Error types for wain

use thiserror::Error;

/// Result type alias using WainError
pub type Result<T> = std::result::Result<T, WainError>;

/// Error type alias for convenience
pub type Error = WainError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for wain
#[derive(Debug, Error)]
pub enum WainError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    #[error("Invalid occasion: {0} (expected one of: romantic, family, business, friends, quiet)")]
    InvalidOccasion(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl WainError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PlaceNotFound(_) => exit_codes::NOT_FOUND,
            Self::InvalidOccasion(_) | Self::InvalidInput(_) => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
