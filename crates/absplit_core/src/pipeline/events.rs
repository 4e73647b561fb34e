//! Progress events emitted while a run is in flight.

use std::path::PathBuf;

use crate::models::ChapterReport;

/// A notable moment in a conversion run.
///
/// Events are delivered to the callback passed to
/// [`run_split_with_events`](super::run_split_with_events) in the order
/// they occur, so a caller can render live progress without the driver
/// printing anything itself.
#[derive(Debug, Clone)]
pub enum SplitEvent {
    /// Probing finished; the run will proceed.
    Probed {
        /// Book title tag, if the container carries one.
        title: Option<String>,
        /// Number of chapters discovered.
        chapter_count: usize,
    },
    /// Cover art was written.
    CoverExtracted { path: PathBuf },
    /// No cover art was found, or extraction failed. Not fatal.
    CoverUnavailable,
    /// A chapter transcode is starting.
    ChapterStarted {
        /// 1-based position in the chapter list.
        index: usize,
        /// Total number of chapters.
        total: usize,
        /// Derived output filename.
        output_filename: String,
        /// Range start as `HH:MM:SS`.
        start: String,
        /// Range end as `HH:MM:SS`.
        end: String,
    },
    /// A chapter transcode finished, successfully or not.
    ChapterFinished { report: ChapterReport },
}
