//! Locate the frontmatter delimiters at the top of a post.

/// Borrowed pieces of a post with frontmatter. Concatenated in order they
/// give back the original text.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct Parts<'a> {
    pub opening: &'a str,
    pub raw: &'a str,
    pub closing: &'a str,
    pub body: &'a str,
}

/// A delimiter line is `---` followed only by whitespace (including `\r`).
fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Split `text` into frontmatter parts. Returns `None` when the first line is
/// not a delimiter or no later delimiter line closes the block.
pub(super) fn split(text: &str) -> Option<Parts<'_>> {
    let mut lines = text.split_inclusive('\n');
    let opening = lines.next()?;
    if !opening.ends_with('\n') || !is_delimiter(opening) {
        return None;
    }

    let mut offset = opening.len();
    for line in lines {
        if is_delimiter(line) {
            let closing_end = offset + line.len();
            return Some(Parts {
                opening,
                raw: &text[opening.len()..offset],
                closing: &text[offset..closing_end],
                body: &text[closing_end..],
            });
        }
        offset += line.len();
    }
    None
}
