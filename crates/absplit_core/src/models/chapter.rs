//! Chapter records as reported by the metadata prober.

use serde::{Deserialize, Serialize};

/// A single chapter with timing and an optional title tag.
///
/// Produced by probing the input container; consumed once per run in
/// probe order. Times are in seconds from the start of the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChapterRecord {
    /// Chapter id from the container, if the prober reported one.
    pub id: Option<i64>,
    /// Chapter start time in seconds.
    pub start_time: f64,
    /// Chapter end time in seconds.
    pub end_time: f64,
    /// Title tag, if the container carries one.
    pub title: Option<String>,
}

impl ChapterRecord {
    /// Create a new chapter covering `[start_time, end_time)`.
    pub fn new(start_time: f64, end_time: f64) -> Self {
        Self {
            id: None,
            start_time,
            end_time,
            title: None,
        }
    }

    /// Set the chapter id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the title tag.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The numeric prefix for this chapter's output file.
    ///
    /// Falls back to the 1-based position in the chapter list when the
    /// container did not report an id.
    pub fn number(&self, position: usize) -> i64 {
        self.id.unwrap_or(position as i64)
    }

    /// The display title, falling back to `Chapter_<position>`.
    pub fn display_title(&self, position: usize) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Chapter_{}", position))
    }

    /// Chapter duration in seconds (zero if the range is inverted).
    pub fn duration_secs(&self) -> f64 {
        (self.end_time - self.start_time).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_prefers_container_id() {
        let chapter = ChapterRecord::new(0.0, 10.0).with_id(7);
        assert_eq!(chapter.number(3), 7);
    }

    #[test]
    fn number_falls_back_to_position() {
        let chapter = ChapterRecord::new(0.0, 10.0);
        assert_eq!(chapter.number(3), 3);
    }

    #[test]
    fn display_title_falls_back_to_position() {
        let titled = ChapterRecord::new(0.0, 10.0).with_title("Intro");
        assert_eq!(titled.display_title(1), "Intro");

        let untitled = ChapterRecord::new(0.0, 10.0);
        assert_eq!(untitled.display_title(2), "Chapter_2");
    }

    #[test]
    fn duration_clamps_inverted_ranges() {
        let chapter = ChapterRecord::new(10.0, 5.0);
        assert_eq!(chapter.duration_secs(), 0.0);
    }
}
