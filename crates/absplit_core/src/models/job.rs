//! Job description for a single conversion run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default separator substituted for spaces in derived filenames.
pub const DEFAULT_SEPARATOR: &str = "_";

/// A single-file conversion job, immutable for the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitJob {
    /// Path to the input audiobook container.
    pub input_path: PathBuf,
    /// Directory that receives the per-chapter files and cover art.
    pub output_dir: PathBuf,
    /// String substituted for spaces in derived filenames.
    pub separator: String,
}

impl SplitJob {
    /// Create a job with the default separator.
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Set the filename separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
