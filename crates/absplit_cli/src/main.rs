mod cli;

use std::path::PathBuf;

use anyhow::Context;

use absplit_core::config::Settings;
use absplit_core::logging::{init_tracing, LogLevel, Marker};
use absplit_core::models::{ChapterOutcome, SplitJob};
use absplit_core::pipeline::{run_split_with_events, SplitEvent};
use absplit_core::tools::FfmpegToolkit;

fn main() -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches();

    let level = if matches.get_flag("verbose") {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    init_tracing(level);

    let input_file = matches
        .get_one::<PathBuf>("input_file")
        .expect("required argument");
    let output_folder = matches
        .get_one::<PathBuf>("output_folder")
        .expect("required argument");

    let settings = match matches.get_one::<PathBuf>("config") {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from '{}'", path.display()))?,
        None => Settings::default(),
    };

    // CLI flag wins over the settings file.
    let separator = matches
        .get_one::<String>("separator")
        .cloned()
        .unwrap_or_else(|| settings.naming.separator.clone());

    let job = SplitJob::new(input_file, output_folder).with_separator(separator);
    let toolkit = FfmpegToolkit::from_settings(&settings);

    println!("Reading metadata from: {}", input_file.display());

    let report = run_split_with_events(&job, &toolkit, render_event)?;

    println!();
    println!(
        "{}",
        Marker::Success.format(&format!(
            "Conversion complete! {}/{} chapters saved to: {}",
            report.converted(),
            report.chapters.len(),
            report.output_dir.display()
        ))
    );

    Ok(())
}

/// Render one pipeline event as console output.
fn render_event(event: SplitEvent) {
    match event {
        SplitEvent::Probed {
            title,
            chapter_count,
        } => {
            if let Some(title) = title {
                println!("Title: {}", title);
            }
            println!("Found {} chapters", chapter_count);
        }
        SplitEvent::CoverExtracted { path } => {
            println!(
                "{}",
                Marker::Success.format(&format!("Cover extracted to {}", path.display()))
            );
        }
        SplitEvent::CoverUnavailable => {
            println!(
                "{}",
                Marker::Failure.format("No cover art found or extraction failed")
            );
        }
        SplitEvent::ChapterStarted {
            index,
            total,
            output_filename,
            start,
            end,
        } => {
            println!();
            println!("[{}/{}] Converting: {}", index, total, output_filename);
            println!("  Time: {} -> {}", start, end);
        }
        SplitEvent::ChapterFinished { report } => match report.outcome {
            ChapterOutcome::Converted => {
                println!(
                    "{}",
                    Marker::Success.format(&format!("Saved: {}", report.output_filename))
                );
            }
            ChapterOutcome::Failed => {
                println!(
                    "{}",
                    Marker::Failure.format(&format!("Failed to convert chapter {}", report.index))
                );
            }
        },
    }
}
