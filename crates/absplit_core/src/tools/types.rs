//! Types for external tool invocations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ChapterRecord;

/// Error type for external tool operations.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Input file not found.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The tool binary could not be spawned.
    #[error("Failed to run {tool}: {message}")]
    SpawnFailed { tool: String, message: String },

    /// The tool exited with a nonzero status.
    #[error("{tool} failed with exit code {exit_code}: {message}")]
    CommandFailed {
        tool: String,
        exit_code: i32,
        message: String,
    },

    /// The tool's output could not be parsed.
    #[error("Failed to parse {tool} output: {message}")]
    ParseError { tool: String, message: String },
}

impl ToolError {
    /// Create a spawn failed error.
    pub fn spawn_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SpawnFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a command failed error.
    pub fn command_failed(
        tool: impl Into<String>,
        exit_code: i32,
        message: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            tool: tool.into(),
            exit_code,
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse_error(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Container-level metadata from the prober.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Container duration in seconds, if reported.
    pub duration_secs: Option<f64>,
    /// Book title tag.
    pub title: Option<String>,
    /// Artist/author tag.
    pub artist: Option<String>,
    /// Album tag.
    pub album: Option<String>,
}

/// Parsed prober output for one input file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeOutput {
    /// Container-level metadata.
    pub format: FormatInfo,
    /// Chapters in container order (possibly empty).
    pub chapters: Vec<ChapterRecord>,
}

/// Request to transcode one time range into an output file.
#[derive(Debug, Clone)]
pub struct TranscodeRequest {
    /// Path to the input container.
    pub input: PathBuf,
    /// Path the encoded chapter is written to (overwritten if present).
    pub output: PathBuf,
    /// Range start as an `HH:MM:SS` string.
    pub start: String,
    /// Range end as an `HH:MM:SS` string.
    pub end: String,
}
