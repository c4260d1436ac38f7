//! Frontmatter normalizer: requote a double-quoted field as a single-quoted scalar.
//!
//! Only the frontmatter lines of the configured field change; other lines and
//! the body are written back exactly as read. Top-level posts only.

mod quote;

pub use quote::{requote_field_line, requote_single};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::BlogtidyConfig;
use crate::document::Document;
use crate::scan::{self, Depth};
use crate::storage;

/// Outcome of one normalizer run.
#[derive(Debug, Default)]
pub struct NormalizeReport {
    pub documents_scanned: usize,
    /// Documents rewritten (or that would be, with `dry_run`).
    pub documents_fixed: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, String)>,
}

/// Requote `text`'s `field` lines. Returns `None` if nothing changes.
pub fn normalize_text(text: &str, field: &str) -> Option<String> {
    let mut doc = Document::parse(text);
    let fm = doc.frontmatter_mut()?;
    if fm.value_of(field).is_none() {
        return None;
    }
    if !fm.rewrite_lines(|line| requote_field_line(line, field)) {
        return None;
    }
    Some(doc.render())
}

/// Normalize every top-level `.md` file under `config.posts_dir`.
pub fn run(config: &BlogtidyConfig, dry_run: bool) -> Result<NormalizeReport> {
    let files = scan::markdown_files(&config.posts_dir, Depth::TopLevel)?;
    let mut report = NormalizeReport::default();

    for path in files {
        report.documents_scanned += 1;
        match normalize_file(&path, &config.description_field, dry_run) {
            Ok(true) => report.documents_fixed.push(path),
            Ok(false) => {}
            Err(e) => {
                tracing::warn!("failed to normalize {}: {:#}", path.display(), e);
                report.failures.push((path, format!("{:#}", e)));
            }
        }
    }

    Ok(report)
}

fn normalize_file(path: &Path, field: &str, dry_run: bool) -> Result<bool> {
    let original = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let Some(updated) = normalize_text(&original, field) else {
        return Ok(false);
    };
    if dry_run {
        tracing::info!("would fix {} in {}", field, path.display());
        return Ok(true);
    }
    let written = storage::write_if_changed(path, &original, &updated)?;
    if written {
        tracing::info!("fixed {} in {}", field, path.display());
    }
    Ok(written)
}
