//! Markdown image reference extraction.

use regex::Regex;
use std::sync::LazyLock;

use crate::url_model::is_network_url;

/// `![alt](target)` or `![alt](target "title")`; alt may hold one level of brackets.
static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"!\[((?:[^\[\]\n]|\[[^\[\]\n]*\])*)\]\(\s*<?([^\s()<>]+)>?(?:\s+(?:"[^"\n]*"|'[^'\n]*'))?\s*\)"#,
    )
    .unwrap()
});

/// An image reference found in a post body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub alt: String,
    pub url: String,
}

/// Image references in `body` whose target is an `http(s)://` URL, in order of appearance.
pub fn network_image_refs(body: &str) -> Vec<ImageRef> {
    IMAGE_RE
        .captures_iter(body)
        .filter_map(|caps| {
            let url = caps.get(2)?.as_str();
            if !is_network_url(url) {
                return None;
            }
            Some(ImageRef {
                alt: caps.get(1).map(|m| m.as_str()).unwrap_or("").to_string(),
                url: url.to_string(),
            })
        })
        .collect()
}
