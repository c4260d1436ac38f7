//! `blogtidy fix-frontmatter` – requote the description field.

use anyhow::Result;
use blogtidy_core::config::BlogtidyConfig;
use blogtidy_core::normalize;

use super::short_path;

pub fn run_fix_frontmatter(cfg: &BlogtidyConfig, dry_run: bool) -> Result<()> {
    let report = normalize::run(cfg, dry_run)?;
    let root = &cfg.posts_dir;
    let verb = if dry_run { "would fix" } else { "fixed" };

    for path in &report.documents_fixed {
        println!("{} {}", verb, short_path(root, path).display());
    }
    for (path, reason) in &report.failures {
        println!("error {}: {}", short_path(root, path).display(), reason);
    }

    println!(
        "{} posts scanned, {} {}, {} failed",
        report.documents_scanned,
        report.documents_fixed.len(),
        verb,
        report.failures.len()
    );
    Ok(())
}
