//! External tool invocation.
//!
//! The pipeline never talks to ffprobe/ffmpeg directly; it goes through
//! the [`MediaToolkit`] trait, which exposes exactly the three
//! capabilities the run needs (probe, extract cover, transcode a time
//! range). [`FfmpegToolkit`] is the production implementation; tests
//! drive the pipeline with a fake instead of spawning processes.

mod ffmpeg;
mod toolkit;
mod types;

pub use ffmpeg::FfmpegToolkit;
pub use toolkit::MediaToolkit;
pub use types::{FormatInfo, ProbeOutput, ToolError, ToolResult, TranscodeRequest};
