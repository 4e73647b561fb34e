//! The pipeline driver.
//!
//! Single-threaded, strictly sequential: every toolkit call is a
//! blocking call the driver waits on before proceeding. No timeouts,
//! no retries, no cleanup of files written before a later failure.

use std::fs;
use std::path::Path;

use super::errors::{SplitError, SplitResult};
use super::events::SplitEvent;
use crate::models::{ChapterOutcome, ChapterReport, SplitJob, SplitReport};
use crate::naming::{chapter_filename, format_timestamp, sanitize_title};
use crate::tools::{MediaToolkit, TranscodeRequest};

/// Recognized input container extensions (lowercase).
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["m4b", "m4a"];

/// Filename of the extracted cover art inside the output directory.
pub const COVER_FILENAME: &str = "cover.jpg";

/// Run a conversion job, discarding progress events.
pub fn run_split(job: &SplitJob, toolkit: &dyn MediaToolkit) -> SplitResult<SplitReport> {
    run_split_with_events(job, toolkit, |_| {})
}

/// Run a conversion job, delivering a [`SplitEvent`] for each notable
/// moment.
///
/// Chapters are processed in probe order; a failed transcode is
/// recorded and the loop continues. Returns the collected report, or a
/// [`SplitError`] if the run aborted before the chapter loop.
pub fn run_split_with_events(
    job: &SplitJob,
    toolkit: &dyn MediaToolkit,
    mut on_event: impl FnMut(SplitEvent),
) -> SplitResult<SplitReport> {
    validate_input(&job.input_path)?;

    fs::create_dir_all(&job.output_dir)
        .map_err(|e| SplitError::io_error("create output directory", e))?;

    let probe = toolkit.probe(&job.input_path)?;

    on_event(SplitEvent::Probed {
        title: probe.format.title.clone(),
        chapter_count: probe.chapters.len(),
    });

    // Cover art is attempted even when the chapter list turns out to be
    // empty; its outcome never affects the run.
    let cover_path = job.output_dir.join(COVER_FILENAME);
    let cover_extracted = match toolkit.extract_cover(&job.input_path, &cover_path) {
        Ok(()) => {
            on_event(SplitEvent::CoverExtracted {
                path: cover_path.clone(),
            });
            true
        }
        Err(e) => {
            tracing::warn!("Cover extraction failed: {}", e);
            on_event(SplitEvent::CoverUnavailable);
            false
        }
    };

    if probe.chapters.is_empty() {
        return Err(SplitError::NoChapters(job.input_path.clone()));
    }

    let total = probe.chapters.len();
    let mut reports = Vec::with_capacity(total);

    for (i, chapter) in probe.chapters.iter().enumerate() {
        let position = i + 1;
        let number = chapter.number(position);
        let safe_title = sanitize_title(&chapter.display_title(position), &job.separator);
        let output_filename = chapter_filename(number, &safe_title, &job.separator);
        let start = format_timestamp(chapter.start_time);
        let end = format_timestamp(chapter.end_time);

        on_event(SplitEvent::ChapterStarted {
            index: position,
            total,
            output_filename: output_filename.clone(),
            start: start.clone(),
            end: end.clone(),
        });

        let request = TranscodeRequest {
            input: job.input_path.clone(),
            output: job.output_dir.join(&output_filename),
            start,
            end,
        };

        let outcome = match toolkit.transcode_range(&request) {
            Ok(()) => ChapterOutcome::Converted,
            Err(e) => {
                tracing::warn!("Failed to convert chapter {}: {}", position, e);
                ChapterOutcome::Failed
            }
        };

        let report = ChapterReport {
            index: position,
            output_filename,
            outcome,
        };
        on_event(SplitEvent::ChapterFinished {
            report: report.clone(),
        });
        reports.push(report);
    }

    Ok(SplitReport {
        output_dir: job.output_dir.clone(),
        cover_extracted,
        chapters: reports,
    })
}

/// Check that the input exists and carries a recognized extension.
fn validate_input(input: &Path) -> SplitResult<()> {
    if !input.exists() {
        return Err(SplitError::InputNotFound(input.to_path_buf()));
    }

    let recognized = input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false);

    if !recognized {
        return Err(SplitError::UnsupportedInput {
            path: input.to_path_buf(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::sync::Mutex;

    use tempfile::{tempdir, TempDir};

    use super::*;
    use crate::models::ChapterRecord;
    use crate::tools::{FormatInfo, ProbeOutput, ToolError, ToolResult};

    /// Toolkit double that records every invocation.
    struct FakeToolkit {
        chapters: Vec<ChapterRecord>,
        cover_available: bool,
        /// Output filenames whose transcode should fail.
        failing_outputs: Vec<String>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeToolkit {
        fn new(chapters: Vec<ChapterRecord>) -> Self {
            Self {
                chapters,
                cover_available: true,
                failing_outputs: Vec::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl MediaToolkit for FakeToolkit {
        fn probe(&self, _input: &Path) -> ToolResult<ProbeOutput> {
            self.record("probe");
            Ok(ProbeOutput {
                format: FormatInfo {
                    title: Some("Test Book".to_string()),
                    ..Default::default()
                },
                chapters: self.chapters.clone(),
            })
        }

        fn extract_cover(&self, _input: &Path, _output: &Path) -> ToolResult<()> {
            self.record("cover");
            if self.cover_available {
                Ok(())
            } else {
                Err(ToolError::command_failed("ffmpeg", 1, "no video stream"))
            }
        }

        fn transcode_range(&self, request: &TranscodeRequest) -> ToolResult<()> {
            let filename = request
                .output
                .file_name()
                .unwrap()
                .to_string_lossy()
                .to_string();
            self.record(format!("transcode:{}", filename));
            if self.failing_outputs.contains(&filename) {
                Err(ToolError::command_failed("ffmpeg", 1, "encode error"))
            } else {
                Ok(())
            }
        }
    }

    /// Create a job whose input file exists with the given name.
    fn job_with_input(name: &str) -> (TempDir, SplitJob) {
        let dir = tempdir().unwrap();
        let input = dir.path().join(name);
        File::create(&input).unwrap();
        let job = SplitJob::new(input, dir.path().join("out"));
        (dir, job)
    }

    fn two_chapters() -> Vec<ChapterRecord> {
        vec![
            ChapterRecord::new(0.0, 65.0).with_id(1).with_title("Intro"),
            ChapterRecord::new(65.0, 130.0).with_id(2),
        ]
    }

    #[test]
    fn derives_expected_filenames_and_timestamps() {
        let (_dir, job) = job_with_input("book.m4b");
        let toolkit = FakeToolkit::new(two_chapters());

        let mut events = Vec::new();
        let report = run_split_with_events(&job, &toolkit, |e| events.push(e)).unwrap();

        let filenames: Vec<&str> = report
            .chapters
            .iter()
            .map(|c| c.output_filename.as_str())
            .collect();
        assert_eq!(filenames, ["01_Intro.mp3", "02_Chapter_2.mp3"]);
        assert!(report.all_converted());

        let ranges: Vec<(String, String)> = events
            .iter()
            .filter_map(|e| match e {
                SplitEvent::ChapterStarted { start, end, .. } => {
                    Some((start.clone(), end.clone()))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            ranges,
            [
                ("00:00:00".to_string(), "00:01:05".to_string()),
                ("00:01:05".to_string(), "00:02:10".to_string()),
            ]
        );
    }

    #[test]
    fn missing_input_aborts_before_any_tool_runs() {
        let dir = tempdir().unwrap();
        let job = SplitJob::new(dir.path().join("missing.m4b"), dir.path().join("out"));
        let toolkit = FakeToolkit::new(two_chapters());

        let result = run_split(&job, &toolkit);

        assert!(matches!(result, Err(SplitError::InputNotFound(_))));
        assert!(toolkit.calls().is_empty());
        assert!(!job.output_dir.exists());
    }

    #[test]
    fn wrong_extension_is_rejected() {
        let (_dir, job) = job_with_input("book.txt");
        let toolkit = FakeToolkit::new(two_chapters());

        let result = run_split(&job, &toolkit);

        assert!(matches!(result, Err(SplitError::UnsupportedInput { .. })));
        assert!(toolkit.calls().is_empty());
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let (_dir, job) = job_with_input("BOOK.M4A");
        let toolkit = FakeToolkit::new(two_chapters());

        assert!(run_split(&job, &toolkit).is_ok());
    }

    #[test]
    fn empty_chapter_list_aborts_after_cover_attempt() {
        let (_dir, job) = job_with_input("book.m4b");
        let toolkit = FakeToolkit::new(Vec::new());

        let result = run_split(&job, &toolkit);

        assert!(matches!(result, Err(SplitError::NoChapters(_))));
        let calls = toolkit.calls();
        assert_eq!(calls, ["probe", "cover"]);
    }

    #[test]
    fn chapter_failure_does_not_stop_the_loop() {
        let (_dir, job) = job_with_input("book.m4b");
        let chapters = vec![
            ChapterRecord::new(0.0, 10.0).with_id(1).with_title("One"),
            ChapterRecord::new(10.0, 20.0).with_id(2).with_title("Two"),
            ChapterRecord::new(20.0, 30.0).with_id(3).with_title("Three"),
        ];
        let mut toolkit = FakeToolkit::new(chapters);
        toolkit.failing_outputs.push("02_Two.mp3".to_string());

        let report = run_split(&job, &toolkit).unwrap();

        assert_eq!(report.chapters.len(), 3);
        assert_eq!(report.converted(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.chapters[1].outcome, ChapterOutcome::Failed);
        // All three transcodes were attempted, in order.
        let transcodes: Vec<String> = toolkit
            .calls()
            .into_iter()
            .filter(|c| c.starts_with("transcode:"))
            .collect();
        assert_eq!(
            transcodes,
            [
                "transcode:01_One.mp3",
                "transcode:02_Two.mp3",
                "transcode:03_Three.mp3",
            ]
        );
    }

    #[test]
    fn cover_failure_is_not_fatal() {
        let (_dir, job) = job_with_input("book.m4b");
        let mut toolkit = FakeToolkit::new(two_chapters());
        toolkit.cover_available = false;

        let mut events = Vec::new();
        let report = run_split_with_events(&job, &toolkit, |e| events.push(e)).unwrap();

        assert!(!report.cover_extracted);
        assert!(report.all_converted());
        assert!(events
            .iter()
            .any(|e| matches!(e, SplitEvent::CoverUnavailable)));
    }

    #[test]
    fn missing_title_and_id_fall_back_to_position() {
        let (_dir, job) = job_with_input("book.m4b");
        let toolkit = FakeToolkit::new(vec![
            ChapterRecord::new(0.0, 5.0),
            ChapterRecord::new(5.0, 10.0),
        ]);

        let report = run_split(&job, &toolkit).unwrap();

        let filenames: Vec<&str> = report
            .chapters
            .iter()
            .map(|c| c.output_filename.as_str())
            .collect();
        assert_eq!(filenames, ["01_Chapter_1.mp3", "02_Chapter_2.mp3"]);
    }

    #[test]
    fn separator_flows_into_filenames() {
        let (_dir, job) = job_with_input("book.m4b");
        let job = job.with_separator("-");
        let toolkit = FakeToolkit::new(vec![ChapterRecord::new(0.0, 5.0)
            .with_id(1)
            .with_title("The First Part")]);

        let report = run_split(&job, &toolkit).unwrap();

        assert_eq!(report.chapters[0].output_filename, "01-The-First-Part.mp3");
    }

    #[test]
    fn output_directory_is_created() {
        let (_dir, job) = job_with_input("book.m4b");
        let toolkit = FakeToolkit::new(two_chapters());

        assert!(!job.output_dir.exists());
        run_split(&job, &toolkit).unwrap();
        assert!(job.output_dir.exists());
    }
}
