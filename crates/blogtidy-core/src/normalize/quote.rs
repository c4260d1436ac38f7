//! Double-quoted to single-quoted YAML scalar conversion.

use crate::document::field_value;

/// Convert a double-quoted YAML scalar (`"..."`, quotes included) to the
/// single-quoted form, doubling interior `'`.
///
/// `\"`, `\\` and `\/` are decoded first. Any other escape has no single-quoted
/// spelling, so such values return `None`, as do values that are not wrapped in
/// double quotes.
pub fn requote_single(value: &str) -> Option<String> {
    let inner = value.strip_prefix('"')?.strip_suffix('"')?;

    let mut decoded = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(esc @ ('"' | '\\' | '/')) => decoded.push(esc),
                _ => return None,
            }
        } else {
            decoded.push(c);
        }
    }

    Some(format!("'{}'", decoded.replace('\'', "''")))
}

/// Rewrite a frontmatter line `<field>: "<value>"` to `<field>: '<value>'`.
/// Returns `None` when the line is not that field or the value is not double-quoted.
pub fn requote_field_line(line: &str, field: &str) -> Option<String> {
    let value = field_value(line, field)?;
    match requote_single(value) {
        Some(quoted) => Some(format!("{}: {}", field, quoted)),
        None => {
            if value.starts_with('"') {
                tracing::debug!("leaving {} as is, value not convertible: {}", field, value);
            }
            None
        }
    }
}
