//! Logging helper for typed input so a stray newline or escape sequence from
//! the terminal never splits or garbles a log line.

const MAX_PREVIEW: usize = 64;

/// Quote `s` for a single-line log entry. Control characters are shown as
/// Rust-style escapes and anything past [`MAX_PREVIEW`] chars becomes `…`.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 2);
    out.push('"');
    for (count, ch) in s.chars().enumerate() {
        if count == MAX_PREVIEW {
            out.push('…');
            break;
        }
        if ch.is_control() || ch == '"' || ch == '\\' {
            out.extend(ch.escape_default());
        } else {
            out.push(ch);
        }
    }
    out.push('"');
    out
}
