//! Error handling for climate analysis operations.
//!
//! Provides error types with context for input loading, record
//! validation, configuration and table output failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClimateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Input file not found at path: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Missing required columns in {path}: {}", .columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    #[error("Unrecognised month value: '{value}'")]
    UnknownMonth { value: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to write table {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}

impl ClimateError {
    /// Create an invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClimateError>;
