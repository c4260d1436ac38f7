//! Filesystem-safe slugs for post filenames.

/// CJK Unified Ideographs block kept as-is in slugs.
const CJK_START: char = '\u{4e00}';
const CJK_END: char = '\u{9fa5}';

fn is_slug_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || (CJK_START..=CJK_END).contains(&c)
}

/// Sanitizes a filename stem (no extension).
///
/// - Replaces every character other than letters, digits, `_`, `-` and CJK ideographs with `_`
/// - Collapses consecutive underscores
/// - Trims leading/trailing underscores
pub fn sanitize_stem(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut prev_underscore = false;

    for c in stem.chars() {
        let replacement = if is_slug_char(c) { c } else { '_' };

        if replacement == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(replacement);
            prev_underscore = false;
        }
    }

    out.trim_matches('_').to_string()
}

/// Split `name` into stem and extension (dot included). A name whose only
/// dots are leading, like `.md`, has no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) if !name[..i].chars().all(|c| c == '.') => (&name[..i], &name[i..]),
        _ => (name, ""),
    }
}

/// Sanitize the stem of `filename` and keep its extension.
/// Returns `None` when the stem has no usable characters.
pub fn sanitize_filename(filename: &str) -> Option<String> {
    let (stem, ext) = split_extension(filename);
    let slug = sanitize_stem(stem);
    if slug.is_empty() {
        return None;
    }
    Some(format!("{}{}", slug, ext))
}
