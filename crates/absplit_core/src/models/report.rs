//! Per-chapter and per-run result reporting.
//!
//! One bad chapter does not abort a run, so outcomes are collected as
//! explicit values rather than surfaced through prints. The CLI renders
//! the report; tests assert on it directly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Outcome of a single chapter transcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChapterOutcome {
    /// The transcoder wrote the output file.
    Converted,
    /// The transcoder reported failure; the run continued.
    Failed,
}

/// Result of processing one chapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterReport {
    /// 1-based position in the chapter list.
    pub index: usize,
    /// Derived output filename (relative to the output directory).
    pub output_filename: String,
    /// Whether the transcode succeeded.
    pub outcome: ChapterOutcome,
}

impl ChapterReport {
    /// Whether this chapter was converted successfully.
    pub fn is_converted(&self) -> bool {
        self.outcome == ChapterOutcome::Converted
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitReport {
    /// Directory the output files were written to.
    pub output_dir: PathBuf,
    /// Whether cover art was extracted.
    pub cover_extracted: bool,
    /// Per-chapter results in probe order.
    pub chapters: Vec<ChapterReport>,
}

impl SplitReport {
    /// Number of chapters converted successfully.
    pub fn converted(&self) -> usize {
        self.chapters.iter().filter(|c| c.is_converted()).count()
    }

    /// Number of chapters that failed to convert.
    pub fn failed(&self) -> usize {
        self.chapters.len() - self.converted()
    }

    /// Whether every chapter converted.
    pub fn all_converted(&self) -> bool {
        self.failed() == 0
    }
}
