/*!
 * Error types for the capconv application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while converting a transcript into captions
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The uploaded bytes are not valid UTF-8
    #[error("Failed to decode transcript as UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// No line of the transcript matched the timecode grammar
    #[error("No valid timecodes found. Use format: [HH:MM:SS.xx] Text")]
    NoTimecodesFound,

    /// A bracketed timecode could not be parsed as HH:MM:SS.ff
    #[error("Invalid timecode '{timecode}': {reason}")]
    Format {
        /// The offending timecode text
        timecode: String,
        /// Why it was rejected
        reason: String,
    },

    /// A conversion option is out of range
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

impl ConversionError {
    pub(crate) fn format(timecode: &str, reason: impl Into<String>) -> Self {
        Self::Format {
            timecode: timecode.to_string(),
            reason: reason.into(),
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the conversion pipeline
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Error loading or validating configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    // FileManager reports through anyhow; keep its context chain
    fn from(error: anyhow::Error) -> Self {
        Self::File(format!("{:#}", error))
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
