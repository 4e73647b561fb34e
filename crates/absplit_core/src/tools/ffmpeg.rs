//! Production toolkit backed by ffprobe/ffmpeg.
//!
//! Probing uses `ffprobe -print_format json -show_format -show_chapters`
//! and walks the resulting JSON; cover extraction and chapter
//! transcoding shell out to ffmpeg. All invocations are synchronous
//! blocking calls with exit-status checks and stderr capture.

use std::path::Path;
use std::process::Command;

use serde_json::Value;

use super::toolkit::MediaToolkit;
use super::types::{FormatInfo, ProbeOutput, ToolError, ToolResult, TranscodeRequest};
use crate::config::Settings;
use crate::models::ChapterRecord;

/// Media toolkit that invokes the ffprobe and ffmpeg binaries.
#[derive(Debug, Clone)]
pub struct FfmpegToolkit {
    ffprobe_bin: String,
    ffmpeg_bin: String,
    /// VBR quality passed as `-q:a`.
    quality: u32,
    /// Output channel count passed as `-ac`.
    channels: u32,
}

impl FfmpegToolkit {
    /// Create a toolkit using the `ffprobe`/`ffmpeg` binaries on PATH
    /// and the default encoding parameters (`-q:a 9`, stereo).
    pub fn new() -> Self {
        Self::from_settings(&Settings::default())
    }

    /// Create a toolkit from application settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            ffprobe_bin: settings.tools.ffprobe.clone(),
            ffmpeg_bin: settings.tools.ffmpeg.clone(),
            quality: settings.encoding.quality,
            channels: settings.encoding.channels,
        }
    }

    /// Run a prepared command, mapping spawn failures and nonzero exits
    /// to [`ToolError`].
    fn run_tool(&self, tool: &str, cmd: &mut Command) -> ToolResult<std::process::Output> {
        tracing::debug!("Running: {:?}", cmd);

        let output = cmd
            .output()
            .map_err(|e| ToolError::spawn_failed(tool, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ToolError::command_failed(
                tool,
                output.status.code().unwrap_or(-1),
                stderr.trim().to_string(),
            ));
        }

        Ok(output)
    }
}

impl Default for FfmpegToolkit {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaToolkit for FfmpegToolkit {
    fn probe(&self, input: &Path) -> ToolResult<ProbeOutput> {
        if !input.exists() {
            return Err(ToolError::FileNotFound(input.to_path_buf()));
        }

        let mut cmd = Command::new(&self.ffprobe_bin);
        cmd.args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_format",
            "-show_chapters",
        ])
        .arg(input);

        let output = self.run_tool("ffprobe", &mut cmd)?;

        let json: Value = serde_json::from_slice(&output.stdout)
            .map_err(|e| ToolError::parse_error("ffprobe", e.to_string()))?;

        Ok(parse_probe_json(&json))
    }

    fn extract_cover(&self, input: &Path, output: &Path) -> ToolResult<()> {
        let mut cmd = Command::new(&self.ffmpeg_bin);
        cmd.arg("-i")
            .arg(input)
            .args(["-an", "-vcodec", "copy"])
            .arg(output)
            .arg("-y");

        self.run_tool("ffmpeg", &mut cmd)?;

        tracing::info!("Extracted cover art to {}", output.display());
        Ok(())
    }

    fn transcode_range(&self, request: &TranscodeRequest) -> ToolResult<()> {
        let mut cmd = Command::new(&self.ffmpeg_bin);
        cmd.arg("-i")
            .arg(&request.input)
            .args(["-ss", &request.start, "-to", &request.end])
            .args(["-q:a", &self.quality.to_string()])
            .args(["-acodec", "libmp3lame"])
            .args(["-ac", &self.channels.to_string()])
            .arg(&request.output)
            .arg("-y");

        self.run_tool("ffmpeg", &mut cmd)?;

        tracing::info!(
            "Transcoded {} -> {} into {}",
            request.start,
            request.end,
            request.output.display()
        );
        Ok(())
    }
}

/// Parse the JSON document emitted by ffprobe.
///
/// Chapter `start_time`/`end_time` arrive as numeric strings from real
/// ffprobe builds but are tolerated as plain numbers too; a missing
/// field reads as zero.
fn parse_probe_json(json: &Value) -> ProbeOutput {
    let mut result = ProbeOutput::default();

    if let Some(format) = json.get("format") {
        result.format = parse_format_info(format);
    }

    if let Some(chapters) = json.get("chapters").and_then(|c| c.as_array()) {
        for chapter in chapters {
            result.chapters.push(parse_chapter(chapter));
        }
    }

    result
}

/// Parse container-level format metadata.
fn parse_format_info(format: &Value) -> FormatInfo {
    let tags = format.get("tags");

    let tag = |name: &str| -> Option<String> {
        tags.and_then(|t| t.get(name))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    };

    FormatInfo {
        duration_secs: parse_time_value(format.get("duration")),
        title: tag("title"),
        artist: tag("artist"),
        album: tag("album"),
    }
}

/// Parse a single chapter element.
fn parse_chapter(chapter: &Value) -> ChapterRecord {
    ChapterRecord {
        id: chapter.get("id").and_then(|v| v.as_i64()),
        start_time: parse_time_value(chapter.get("start_time")).unwrap_or(0.0),
        end_time: parse_time_value(chapter.get("end_time")).unwrap_or(0.0),
        title: chapter
            .get("tags")
            .and_then(|t| t.get("title"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string()),
    }
}

/// Read a time field that may be a number or a numeric string.
fn parse_time_value(value: Option<&Value>) -> Option<f64> {
    let value = value?;
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn probe_nonexistent_file() {
        let toolkit = FfmpegToolkit::new();
        let result = toolkit.probe(Path::new("/nonexistent/book.m4b"));
        assert!(matches!(result, Err(ToolError::FileNotFound(_))));
    }

    #[test]
    fn parses_chapters_with_string_times() {
        let json = json!({
            "chapters": [
                {
                    "id": 0,
                    "start_time": "0.000000",
                    "end_time": "65.500000",
                    "tags": { "title": "Intro" }
                },
                {
                    "id": 1,
                    "start_time": "65.500000",
                    "end_time": "130.000000"
                }
            ],
            "format": {
                "duration": "130.000000",
                "tags": { "title": "Test Book", "artist": "A. Author" }
            }
        });

        let probe = parse_probe_json(&json);

        assert_eq!(probe.chapters.len(), 2);
        assert_eq!(probe.chapters[0].id, Some(0));
        assert_eq!(probe.chapters[0].title.as_deref(), Some("Intro"));
        assert!((probe.chapters[0].end_time - 65.5).abs() < 1e-9);
        assert!(probe.chapters[1].title.is_none());
        assert_eq!(probe.format.title.as_deref(), Some("Test Book"));
        assert_eq!(probe.format.artist.as_deref(), Some("A. Author"));
        assert!((probe.format.duration_secs.unwrap() - 130.0).abs() < 1e-9);
    }

    #[test]
    fn parses_chapters_with_numeric_times() {
        let json = json!({
            "chapters": [
                { "start_time": 0, "end_time": 12.5 }
            ]
        });

        let probe = parse_probe_json(&json);

        assert_eq!(probe.chapters.len(), 1);
        assert!(probe.chapters[0].id.is_none());
        assert!((probe.chapters[0].end_time - 12.5).abs() < 1e-9);
    }

    #[test]
    fn missing_times_read_as_zero() {
        let json = json!({ "chapters": [ { "id": 3 } ] });

        let probe = parse_probe_json(&json);

        assert_eq!(probe.chapters[0].start_time, 0.0);
        assert_eq!(probe.chapters[0].end_time, 0.0);
    }

    #[test]
    fn empty_document_yields_no_chapters() {
        let probe = parse_probe_json(&json!({}));
        assert!(probe.chapters.is_empty());
    }
}
