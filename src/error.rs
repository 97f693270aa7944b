//! Unified error types for chatstats.
//!
//! Parsing and aggregation never fail: malformed lines, invalid dates and
//! degenerate inputs all degrade to empty or zero-valued results. The errors
//! here belong to the edges of the pipeline, such as reading the export from
//! disk, writing the JSON report and validating CLI input.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The export file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing the report)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error while rendering a report.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No export file was provided.
    #[error("No file provided")]
    MissingInput,

    /// An export file was provided with an empty name.
    #[error("Empty filename")]
    EmptyFilename,

    /// Invalid date supplied as the reference day.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },
}

impl ChatstatsError {
    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatsError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if the caller failed to supply a usable input file.
    ///
    /// These correspond to client errors in a request/response shell.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ChatstatsError::MissingInput
                | ChatstatsError::EmptyFilename
                | ChatstatsError::InvalidDate { .. }
        )
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatsError::InvalidDate { .. })
    }
}
