//! Filename derivation helpers.
//!
//! Pure functions mapping chapter metadata to filesystem-safe output
//! names and ffmpeg-compatible timestamp strings.

/// Characters stripped from derived filenames.
pub const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Sanitize a free-text title for use as a filename component.
///
/// Spaces are replaced with `separator` first, then every character in
/// [`INVALID_FILENAME_CHARS`] is deleted. The order matters: a space
/// adjacent to a struck character must not collapse into it.
///
/// Titles that sanitize to the same string are not disambiguated; only
/// the numeric chapter prefix keeps output names unique in practice.
pub fn sanitize_title(title: &str, separator: &str) -> String {
    title
        .replace(' ', separator)
        .chars()
        .filter(|c| !INVALID_FILENAME_CHARS.contains(c))
        .collect()
}

/// Format a seconds value as a zero-padded `HH:MM:SS` string.
///
/// Fractional seconds are truncated, not rounded, and hours are not
/// bounded (100 hours formats as `100:00:00`). Negative input clamps
/// to zero.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Build the output filename for a chapter.
///
/// The numeric prefix is zero-padded to two digits; wider numbers keep
/// their full width.
pub fn chapter_filename(number: i64, safe_title: &str, separator: &str) -> String {
    format!("{:02}{}{}.mp3", number, separator, safe_title)
}
