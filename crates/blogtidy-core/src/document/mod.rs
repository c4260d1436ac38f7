//! Post document model: optional `---` frontmatter block followed by a body.
//!
//! One parser shared by all jobs. Parsing never fails: text without a
//! well-formed opening and closing delimiter is all body. Rendering a parsed
//! document reproduces the input byte-for-byte, so jobs only touch what they
//! rewrite.

mod frontmatter;
mod split;
mod yaml;

pub use frontmatter::{field_value, DocumentError, Frontmatter};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// A Markdown post split into frontmatter and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    frontmatter: Option<Frontmatter>,
    body: String,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        match split::split(text) {
            Some(parts) => Document {
                frontmatter: Some(Frontmatter::new(parts.opening, parts.raw, parts.closing)),
                body: parts.body.to_string(),
            },
            None => Document {
                frontmatter: None,
                body: text.to_string(),
            },
        }
    }

    /// Read and parse a UTF-8 post from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Ok(Self::parse(&text))
    }

    pub fn frontmatter(&self) -> Option<&Frontmatter> {
        self.frontmatter.as_ref()
    }

    pub fn frontmatter_mut(&mut self) -> Option<&mut Frontmatter> {
        self.frontmatter.as_mut()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_body(&mut self, body: String) {
        self.body = body;
    }

    /// Full text: frontmatter delimiters and block exactly as read, then the body.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        if let Some(fm) = &self.frontmatter {
            fm.render_into(&mut out);
        }
        out.push_str(&self.body);
        out
    }
}
