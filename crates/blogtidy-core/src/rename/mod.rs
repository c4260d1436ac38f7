//! Post renamer: `<date>-<slug>.md` from frontmatter date plus sanitized filename.
//!
//! Never overwrites: an occupied target is reported as a conflict and the
//! source stays where it is. Top-level posts only.

mod date;
mod slug;

pub use date::{extract_date, DateError};
pub use slug::{sanitize_filename, sanitize_stem};

use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::BlogtidyConfig;
use crate::document::Document;
use crate::scan::{self, Depth};

/// Outcome of one renamer run.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub scanned: usize,
    /// `(from, to)` pairs renamed (or planned, with `dry_run`).
    pub renamed: Vec<(PathBuf, PathBuf)>,
    /// Files already carrying their computed name.
    pub unchanged: usize,
    /// `(from, target)` pairs skipped because the target exists.
    pub conflicts: Vec<(PathBuf, PathBuf)>,
    pub skipped: Vec<(PathBuf, String)>,
    pub failures: Vec<(PathBuf, String)>,
}

/// New filename for `filename` given an optional date prefix.
///
/// Returns `None` when the stem has no usable characters.
pub fn planned_name(filename: &str, date_prefix: Option<&str>) -> Option<String> {
    let cleaned = sanitize_filename(filename)?;
    match date_prefix {
        Some(prefix) if !cleaned.starts_with(prefix) => Some(format!("{}-{}", prefix, cleaned)),
        _ => Some(cleaned),
    }
}

/// Sanitized date prefix for the post at `path`; read or parse errors mean no prefix.
pub fn read_date_prefix(path: &Path, fields: &[String]) -> Option<String> {
    let doc = match Document::load(path) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!("no date for {}: {:#}", path.display(), e);
            return None;
        }
    };
    match extract_date(&doc, fields) {
        Ok(date) => date.map(|d| sanitize_stem(&d)).filter(|d| !d.is_empty()),
        Err(e) => {
            tracing::warn!("no date for {}: {}", path.display(), e);
            None
        }
    }
}

/// Rename every top-level `.md` file under `config.posts_dir`.
pub fn run(config: &BlogtidyConfig, dry_run: bool) -> Result<RenameReport> {
    let files = scan::markdown_files(&config.posts_dir, Depth::TopLevel)?;
    let mut report = RenameReport::default();
    // Targets handed out this run; only consulted for dry runs, where nothing moves on disk.
    let mut claimed: HashSet<PathBuf> = HashSet::new();

    for old_path in files {
        report.scanned += 1;

        let Some(filename) = old_path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!("skipping non UTF-8 filename {}", old_path.display());
            report
                .skipped
                .push((old_path, "filename is not valid UTF-8".to_string()));
            continue;
        };

        let date_prefix = read_date_prefix(&old_path, &config.date_fields);
        let Some(new_name) = planned_name(filename, date_prefix.as_deref()) else {
            tracing::warn!("skipping {}: no usable characters in name", old_path.display());
            report
                .skipped
                .push((old_path, "no usable characters in name".to_string()));
            continue;
        };

        let new_path = old_path.with_file_name(&new_name);
        if new_path == old_path {
            report.unchanged += 1;
            continue;
        }

        if new_path.exists() || (dry_run && claimed.contains(&new_path)) {
            tracing::warn!(
                "target exists, skipping {} -> {}",
                old_path.display(),
                new_path.display()
            );
            report.conflicts.push((old_path, new_path));
            continue;
        }

        if dry_run {
            claimed.insert(new_path.clone());
            report.renamed.push((old_path, new_path));
            continue;
        }

        match fs::rename(&old_path, &new_path) {
            Ok(()) => {
                tracing::info!("renamed {} -> {}", old_path.display(), new_path.display());
                report.renamed.push((old_path, new_path));
            }
            Err(e) => {
                tracing::warn!("failed to rename {}: {}", old_path.display(), e);
                report.failures.push((old_path, e.to_string()));
            }
        }
    }

    Ok(report)
}
