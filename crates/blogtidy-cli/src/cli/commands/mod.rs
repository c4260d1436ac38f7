//! CLI command handlers, one file per subcommand.

mod fix_frontmatter;
mod localize_images;
mod rename_posts;

pub use fix_frontmatter::run_fix_frontmatter;
pub use localize_images::run_localize_images;
pub use rename_posts::run_rename_posts;

use std::path::{Path, PathBuf};

/// `path` relative to the posts root when possible, for shorter output lines.
pub(crate) fn short_path(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
