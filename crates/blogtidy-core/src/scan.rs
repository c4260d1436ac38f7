//! Enumerate Markdown posts under the posts directory.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// How far below the posts root to look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Only files directly inside the root.
    TopLevel,
    /// The whole tree.
    Recursive,
}

fn is_markdown(path: &Path) -> bool {
    path.extension().map(|e| e == "md").unwrap_or(false)
}

/// Returns `.md` files under `root`, sorted by path.
///
/// Symlinks to files count as posts; symlinked directories are not descended
/// into. Unreadable entries are logged and skipped. A missing or non-directory
/// root is an error.
pub fn markdown_files(root: &Path, depth: Depth) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("posts directory not found: {}", root.display());
    }

    let mut walker = WalkDir::new(root).min_depth(1);
    if depth == Depth::TopLevel {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        // `Path::is_file` follows the link, unlike the entry's own file type.
        if is_markdown(entry.path()) && entry.path().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}
