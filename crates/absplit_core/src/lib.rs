//! absplit core - backend logic for splitting audiobooks into chapters.
//!
//! This crate contains all business logic with zero CLI dependencies.
//! It probes a single-file audiobook container (m4b/m4a) for chapter
//! boundaries, extracts embedded cover art, and transcodes each chapter
//! into its own mp3 file. The actual decode/encode work is delegated to
//! external ffprobe/ffmpeg processes behind the [`tools::MediaToolkit`]
//! trait, so the pipeline can be driven by a fake in tests.

pub mod config;
pub mod logging;
pub mod models;
pub mod naming;
pub mod pipeline;
pub mod tools;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
