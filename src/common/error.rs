//! Error types for fibgold
//!
//! Messages are shown to the user verbatim, so they read as instructions
//! rather than diagnostics.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for fibgold
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    #[error("Invalid input. Please enter a valid number.")]
    InvalidInput(String),

    #[error("Please enter a positive integer.")]
    NonPositiveTerms(i64),

    // === Output Errors ===
    #[error("Failed to render chart: {0}")]
    Render(String),

    #[error("Could not display figures in browser: {0}")]
    Display(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    #[error("Failed to write file '{path}': {error}")]
    FileWrite { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a render error from any plotters drawing error
    pub fn render<E: std::fmt::Display>(e: E) -> Self {
        Self::Render(e.to_string())
    }

    /// Create a file write error
    pub fn file_write(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileWrite {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }
}
