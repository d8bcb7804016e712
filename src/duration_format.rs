/// Formats an elapsed duration in milliseconds as `MM:SS`.
///
/// Negative input is clamped to zero. Minutes are not wrapped at 60, so an
/// elapsed hour renders as `60:00`.
pub fn format_duration(ms: i64) -> String {
    let total_seconds = ms.max(0) / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}
