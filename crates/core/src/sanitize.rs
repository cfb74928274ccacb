//! Length clamping for free text entering a prompt.

/// Trim `value` and truncate it to at most `max_chars` characters.
///
/// Absent input yields `""`. Trailing whitespace exposed by the cut is
/// trimmed too, so `clamp(clamp(s, n), n) == clamp(s, n)`.
pub fn clamp<'a>(value: impl Into<Option<&'a str>>, max_chars: usize) -> String {
    let Some(value) = value.into() else {
        return String::new();
    };
    let trimmed = value.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((cut, _)) => trimmed[..cut].trim_end().to_string(),
        None => trimmed.to_string(),
    }
}
