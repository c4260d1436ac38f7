//! Frontmatter block: line-level access for in-place edits, YAML access for typed reads.

use serde_yaml::{Mapping, Value};

use super::yaml::LastWins;

/// Structured read of the frontmatter failed.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("frontmatter is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("frontmatter is not a key/value mapping")]
    NotAMapping,
}

/// The text between the two `---` lines, plus the delimiter lines as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    opening: String,
    raw: String,
    closing: String,
}

/// Split a line produced by `split_inclusive('\n')` into content and terminator.
fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}

/// Trimmed value of a frontmatter line `key: value`, or `None` if the line is
/// not for `key`. Indented (nested) keys do not match.
pub fn field_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.strip_prefix(key)?.strip_prefix(':').map(str::trim)
}

impl Frontmatter {
    pub(super) fn new(opening: &str, raw: &str, closing: &str) -> Self {
        Self {
            opening: opening.to_string(),
            raw: raw.to_string(),
            closing: closing.to_string(),
        }
    }

    /// Block text between the delimiters, line terminators included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lines of the block without their terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.raw
            .split_inclusive('\n')
            .map(|line| split_terminator(line).0)
    }

    /// Trimmed value of the first line starting with `key:`.
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.lines().find_map(|line| field_value(line, key))
    }

    /// Replace lines for which `f` returns `Some`. Terminators are preserved.
    /// Returns true if any line actually changed.
    pub fn rewrite_lines<F>(&mut self, mut f: F) -> bool
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut out = String::with_capacity(self.raw.len());
        let mut changed = false;
        for line in self.raw.split_inclusive('\n') {
            let (content, terminator) = split_terminator(line);
            match f(content) {
                Some(new) if new != content => {
                    out.push_str(&new);
                    changed = true;
                }
                _ => out.push_str(content),
            }
            out.push_str(terminator);
        }
        if changed {
            self.raw = out;
        }
        changed
    }

    /// Parse the block as YAML. An empty block is an empty mapping; a repeated
    /// key keeps its last value.
    pub fn fields(&self) -> Result<Mapping, DocumentError> {
        if self.raw.trim().is_empty() {
            return Ok(Mapping::new());
        }
        let LastWins(value) = serde_yaml::from_str(&self.raw)?;
        match value {
            Value::Mapping(map) => Ok(map),
            Value::Null => Ok(Mapping::new()),
            _ => Err(DocumentError::NotAMapping),
        }
    }

    pub(super) fn render_into(&self, out: &mut String) {
        out.push_str(&self.opening);
        out.push_str(&self.raw);
        out.push_str(&self.closing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fm(raw: &str) -> Frontmatter {
        Frontmatter::new("---\n", raw, "---\n")
    }

    #[test]
    fn value_of_prefix_lookup() {
        let f = fm("title: Hello\ndescription:   \"x\"  \n");
        assert_eq!(f.value_of("title"), Some("Hello"));
        assert_eq!(f.value_of("description"), Some("\"x\""));
        assert_eq!(f.value_of("date"), None);
    }

    #[test]
    fn value_of_requires_colon_after_key() {
        let f = fm("titles: many\n");
        assert_eq!(f.value_of("title"), None);
    }

    #[test]
    fn value_of_ignores_indented_keys() {
        let f = fm("meta:\n  title: nested\n");
        assert_eq!(f.value_of("title"), None);
    }

    #[test]
    fn field_value_single_line() {
        assert_eq!(field_value("description:  \"x\" ", "description"), Some("\"x\""));
        assert_eq!(field_value("description:", "description"), Some(""));
        assert_eq!(field_value("descriptions: x", "description"), None);
        assert_eq!(field_value(" description: x", "description"), None);
    }

    #[test]
    fn rewrite_lines_preserves_terminators() {
        let mut f = fm("a: 1\r\nb: 2\r\nc: 3");
        let changed = f.rewrite_lines(|line| {
            if line.starts_with("b:") {
                Some("b: two".to_string())
            } else {
                None
            }
        });
        assert!(changed);
        assert_eq!(f.raw(), "a: 1\r\nb: two\r\nc: 3");
    }

    #[test]
    fn rewrite_lines_same_text_is_unchanged() {
        let mut f = fm("a: 1\n");
        assert!(!f.rewrite_lines(|line| Some(line.to_string())));
        assert_eq!(f.raw(), "a: 1\n");
    }

    #[test]
    fn fields_in_order() {
        let f = fm("title: T\npublished: 2024-03-05\ntags: [a, b]\n");
        let map = f.fields().unwrap();
        let keys: Vec<_> = map.keys().filter_map(|k| k.as_str()).collect();
        assert_eq!(keys, ["title", "published", "tags"]);
        assert_eq!(map.get("published").and_then(|v| v.as_str()), Some("2024-03-05"));
    }

    #[test]
    fn fields_empty_block() {
        assert!(fm("").fields().unwrap().is_empty());
        assert!(fm("  \n").fields().unwrap().is_empty());
    }

    #[test]
    fn fields_repeated_key_last_wins() {
        let map = fm("tags: a\npublished: 2024-03-05\ntags: b\n").fields().unwrap();
        assert_eq!(map.get("tags").and_then(|v| v.as_str()), Some("b"));
        assert_eq!(map.get("published").and_then(|v| v.as_str()), Some("2024-03-05"));
    }

    #[test]
    fn fields_malformed_yaml() {
        assert!(matches!(
            fm("title: [unclosed\n").fields(),
            Err(DocumentError::Yaml(_))
        ));
    }

    #[test]
    fn fields_not_a_mapping() {
        assert!(matches!(
            fm("- a\n- b\n").fields(),
            Err(DocumentError::NotAMapping)
        ));
    }
}
