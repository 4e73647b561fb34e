//! The media toolkit trait.

use std::path::Path;

use super::types::{ProbeOutput, ToolResult, TranscodeRequest};

/// External media tooling as seen by the pipeline.
///
/// Three capabilities, one per external collaborator:
///
/// 1. `probe` - read container metadata and the chapter list
/// 2. `extract_cover` - write embedded cover art to a file
/// 3. `transcode_range` - encode one time range into an output file
///
/// Implementations report failure through [`ToolResult`]; how a failure
/// affects the run (fatal for probing, logged-only for the rest) is the
/// pipeline's decision, not the toolkit's.
pub trait MediaToolkit: Send + Sync {
    /// Probe `input` for format metadata and chapters.
    fn probe(&self, input: &Path) -> ToolResult<ProbeOutput>;

    /// Extract embedded cover art from `input` into `output`.
    fn extract_cover(&self, input: &Path, output: &Path) -> ToolResult<()>;

    /// Transcode the requested time range, overwriting any existing
    /// file at the output path.
    fn transcode_range(&self, request: &TranscodeRequest) -> ToolResult<()>;
}
