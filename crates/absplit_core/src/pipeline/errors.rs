//! Error types for the conversion pipeline.
//!
//! Only unrecoverable conditions surface here; cover-art and
//! per-chapter transcode failures are reported through the run report
//! instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::tools::ToolError;

/// Fatal pipeline error; the run aborts and nothing further is attempted.
#[derive(Error, Debug)]
pub enum SplitError {
    /// The input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input file has an unrecognized extension.
    #[error("Input file must be m4b or m4a, got: {}", .path.display())]
    UnsupportedInput { path: PathBuf },

    /// The metadata prober failed.
    #[error("Failed to read metadata: {0}")]
    ProbeFailed(#[from] ToolError),

    /// The prober reported no chapters.
    #[error("No chapters found in {}", .0.display())]
    NoChapters(PathBuf),

    /// File I/O error with operation context.
    #[error("I/O error in {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: io::Error,
    },
}

impl SplitError {
    /// Create an I/O error with context.
    pub fn io_error(operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Result type for pipeline operations.
pub type SplitResult<T> = Result<T, SplitError>;
