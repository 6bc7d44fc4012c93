//! Shared text helpers for the scanners.

/// Count the `,`-separated segments of a string.
///
/// An empty string still counts as one segment, matching how a plain
/// split behaves.
pub fn count_segments(s: &str) -> usize {
    s.split(',').count()
}

/// Whether a character can appear in an identifier (`[A-Za-z0-9_]`).
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Find the first run of identifier characters in `s`.
pub fn leading_word(s: &str) -> Option<&str> {
    let start = s.find(is_word_char)?;
    let rest = &s[start..];
    let end = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
    Some(&rest[..end])
}
