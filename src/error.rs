//! Error types for Graphdeck.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! Input validation for custom data has its own error type in
//! [`crate::custom::ParseError`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Graphdeck operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur in Graphdeck.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Unsupported file format.
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat {
        /// Offending extension (empty if the path had none).
        extension: String,
    },

    /// CSV reading or writing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A CSV row did not hold two numeric columns.
    #[error("Invalid CSV row {line}: {reason}")]
    InvalidCsv {
        /// 1-based line number in the file.
        line: u64,
        /// What was wrong with the row.
        reason: String,
    },

    /// Failed to decode or encode a raster image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Plot rendering failed.
    #[error("Render error: {0}")]
    Render(String),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Save or export was requested with nothing on screen.
    #[error("Nothing to {action}: plot a graph first")]
    NoActiveView {
        /// The action that needed a view.
        action: &'static str,
    },

    /// X and Y series cannot form a plot.
    #[error("Invalid series: X has {x_len} values, Y has {y_len}")]
    InvalidSeries {
        /// Number of X values.
        x_len: usize,
        /// Number of Y values.
        y_len: usize,
    },
}

impl GraphError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create an UnsupportedFormat error.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Create an InvalidCsv error.
    pub fn invalid_csv(line: u64, reason: impl Into<String>) -> Self {
        Self::InvalidCsv {
            line,
            reason: reason.into(),
        }
    }

    /// Create a Render error from any displayable backend error.
    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render(err.to_string())
    }
}
