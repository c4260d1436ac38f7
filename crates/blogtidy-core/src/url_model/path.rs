//! Filename extraction from URL path.

/// Extracts the last path segment from a URL for use as a filename hint.
///
/// Query string and fragment are not part of the segment. Percent-encoded
/// segments are decoded when the result is a plain filename (no separators,
/// whitespace, parentheses or control characters); otherwise the encoded form
/// is kept so the name stays usable inside a Markdown link.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    if !segment.contains('%') {
        return Some(segment.to_string());
    }
    match percent_decode(segment) {
        Some(decoded) if is_plain_filename(&decoded) => Some(decoded),
        _ => Some(segment.to_string()),
    }
}

fn is_plain_filename(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.chars().any(|c| {
            c == '/' || c == '\\' || c == '(' || c == ')' || c == '%' || c.is_whitespace()
                || c.is_control()
        })
}

/// Percent-decode into UTF-8. Returns `None` for malformed escapes or invalid UTF-8.
fn percent_decode(input: &str) -> Option<String> {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.bytes();
    while let Some(b) = bytes.next() {
        if b == b'%' {
            let high = bytes.next().and_then(hex_digit)?;
            let low = bytes.next().and_then(hex_digit)?;
            out.push(high << 4 | low);
        } else {
            out.push(b);
        }
    }
    String::from_utf8(out).ok()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
