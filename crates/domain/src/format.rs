//! Duration display and input parsing shared by the evaluator and CLI.

/// Format a duration in seconds as zero-padded `HH:MM:SS`.
pub fn format_duration(sec: u64) -> String {
    let hours = sec / 3600;
    let minutes = (sec % 3600) / 60;
    let seconds = sec % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Parse a user-entered duration.
///
/// Accepts plain seconds (`"95"`), `MM:SS`, or `HH:MM:SS`. Returns `None`
/// for empty input or anything that does not parse as numbers.
pub fn parse_duration_input(value: &str) -> Option<u64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return trimmed.parse().ok();
    }

    let parts: Vec<u64> = trimmed
        .split(':')
        .map(|p| p.trim().parse().ok())
        .collect::<Option<Vec<_>>>()?;

    match parts.as_slice() {
        [m, s] => Some(m * 60 + s),
        [h, m, s] => Some(h * 3600 + m * 60 + s),
        _ => None,
    }
}
