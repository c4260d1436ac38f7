//! `blogtidy rename-posts` – rename posts to `<date>-<slug>.md`.

use anyhow::Result;
use blogtidy_core::config::BlogtidyConfig;
use blogtidy_core::rename;

use super::short_path;

pub fn run_rename_posts(cfg: &BlogtidyConfig, dry_run: bool) -> Result<()> {
    let report = rename::run(cfg, dry_run)?;
    let root = &cfg.posts_dir;

    for (from, to) in &report.renamed {
        println!(
            "{} -> {}",
            short_path(root, from).display(),
            short_path(root, to).display()
        );
    }
    for (from, to) in &report.conflicts {
        println!(
            "skipped {}: {} already exists",
            short_path(root, from).display(),
            short_path(root, to).display()
        );
    }
    for (path, reason) in report.skipped.iter().chain(&report.failures) {
        println!("skipped {}: {}", short_path(root, path).display(), reason);
    }

    let done = if dry_run { "to rename" } else { "renamed" };
    println!(
        "{} posts scanned, {} {}, {} unchanged, {} conflicts, {} skipped, {} failed",
        report.scanned,
        report.renamed.len(),
        done,
        report.unchanged,
        report.conflicts.len(),
        report.skipped.len(),
        report.failures.len()
    );
    Ok(())
}
