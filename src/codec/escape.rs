use super::{DELIMITER, ESCAPE};

/// Escape a field value so it can be embedded in a line.
///
/// Backslashes are escaped first so the escapes added for `;` and newline are
/// not escaped a second time.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            ESCAPE => out.push_str("\\\\"),
            DELIMITER => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}

/// Resolve escapes in a single field.
///
/// `\n` becomes a newline, `\\` a backslash and `\;` a semicolon. Any other
/// escaped character is kept as-is without the backslash. A lone trailing
/// backslash is dropped.
pub fn unescape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut escaped = false;
    for c in field.chars() {
        if escaped {
            out.push(match c {
                'n' => '\n',
                other => other,
            });
            escaped = false;
        } else if c == ESCAPE {
            escaped = true;
        } else {
            out.push(c);
        }
    }
    out
}

/// Split a raw line on unescaped delimiters.
///
/// Escape sequences are copied into the field untouched (backslash included)
/// so `unescape` can resolve them afterwards.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut cur = String::new();
    let mut escaped = false;
    for c in line.chars() {
        if escaped {
            cur.push(c);
            escaped = false;
        } else if c == ESCAPE {
            cur.push(c);
            escaped = true;
        } else if c == DELIMITER {
            fields.push(std::mem::take(&mut cur));
        } else {
            cur.push(c);
        }
    }
    fields.push(cur);
    fields
}
