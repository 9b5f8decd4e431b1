//! Input utilities for the prompt line.

/// Sanitize text destined for the single-line prompt.
///
/// Tabs and line breaks become single spaces so pasted text cannot split the
/// prompt; other control characters are dropped.
pub fn sanitize_line_input(text: &str) -> String {
    let mut sanitized = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\t' | '\r' | '\n' => sanitized.push(' '),
            _ if !c.is_control() => sanitized.push(c),
            _ => {}
        }
    }

    sanitized
}
