//! `blogtidy localize-images` – cache remote images and rewrite their links.

use anyhow::Result;
use blogtidy_core::config::BlogtidyConfig;
use blogtidy_core::fetch::CurlFetcher;
use blogtidy_core::localize;

use super::short_path;

pub fn run_localize_images(cfg: &BlogtidyConfig) -> Result<()> {
    let fetcher = CurlFetcher::new(cfg.fetch.clone());
    let report = localize::run(cfg, &fetcher)?;
    let root = &cfg.posts_dir;

    for path in &report.documents_updated {
        println!("updated  {}", short_path(root, path).display());
    }
    for f in &report.fetch_failures {
        println!(
            "failed   {}: {} ({})",
            short_path(root, &f.document).display(),
            f.url,
            f.reason
        );
    }
    for (path, reason) in &report.document_failures {
        println!("error    {}: {}", short_path(root, path).display(), reason);
    }

    println!(
        "{} posts scanned, {} updated, {} links rewritten; {} images downloaded, {} reused, {} failed",
        report.documents_scanned,
        report.documents_updated.len(),
        report.links_rewritten,
        report.downloaded,
        report.reused,
        report.fetch_failures.len()
    );
    Ok(())
}
