//! Error types for linediff
//!
//! A mismatch between expected and actual lines is never an error: it is
//! the normal "not equal" verdict. Errors cover the surroundings only,
//! such as unreadable files, bad configuration and broken scenarios.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for linediff
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === Scenario Errors ===
    #[error("Scenario error: {0}")]
    Scenario(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Assertion Errors ===
    #[error("Assertion failed: {0}")]
    TestAssertion(String),
}

impl Error {
    /// Create a file read error for a path
    pub fn file_read(path: &Path, error: impl std::fmt::Display) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }
}
