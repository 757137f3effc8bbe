//! Error types for the report binary.
//!
//! [`ReportError`] wraps every failure mode between reading the input and
//! printing the derived views.

use std::path::PathBuf;

/// Top-level error for the report binary.
///
/// Each variant wraps a specific failure, providing a single error type
/// that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: replay_core::ConfigError,
    },

    /// Reading the analysis input failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that could not be read; `-` for stdin.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The input was not a valid analysis document, or the output could
    /// not be serialized.
    #[error("JSON error: {source}")]
    Json {
        /// The underlying serde error.
        #[from]
        source: serde_json::Error,
    },

    /// No input path was given on the command line.
    #[error("usage: replay-report <analysis.json | -> [page]")]
    MissingInput,

    /// The page argument is not a positive integer.
    #[error("invalid build log page '{value}': expected an integer of at least 1")]
    InvalidPage {
        /// The argument as given.
        value: String,
    },
}
