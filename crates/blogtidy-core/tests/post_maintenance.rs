//! Integration test: the three maintenance jobs run back to back over one posts tree.

use blogtidy_core::config::BlogtidyConfig;
use blogtidy_core::fetch::{FetchError, Fetcher};
use blogtidy_core::{localize, normalize, rename};
use std::fs;
use tempfile::tempdir;

struct OfflineFetcher;

impl Fetcher for OfflineFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        if url.ends_with("/cover.png") {
            Ok(b"cover".to_vec())
        } else {
            Err(FetchError::Http(404))
        }
    }
}

#[test]
fn full_pass_then_idempotent() {
    let posts = tempdir().unwrap();
    let root = posts.path();
    fs::write(
        root.join("Rust Notes (1).md"),
        "---\ntitle: Rust\npublished: 2024-03-05\ndescription: \"Rust's ownership\"\n---\n![c](https://cdn.example.com/cover.png)\n![x](https://cdn.example.com/x.png)\n",
    )
    .unwrap();
    fs::write(root.join("about.md"), "# About\n").unwrap();
    fs::create_dir(root.join("drafts")).unwrap();
    fs::write(
        root.join("drafts/wip post.md"),
        "---\ndescription: \"draft\"\n---\n![c](https://cdn.example.com/cover.png)\n",
    )
    .unwrap();

    let cfg = BlogtidyConfig::for_posts_dir(root);

    let normalized = normalize::run(&cfg, false).unwrap();
    assert_eq!(normalized.documents_scanned, 2);
    assert_eq!(normalized.documents_fixed.len(), 1);

    let renamed = rename::run(&cfg, false).unwrap();
    assert_eq!(renamed.renamed.len(), 1);
    assert_eq!(renamed.unchanged, 1);
    let post = root.join("2024-03-05-Rust_Notes_1.md");
    assert!(post.exists());

    let localized = localize::run(&cfg, &OfflineFetcher).unwrap();
    assert_eq!(localized.documents_scanned, 3);
    assert_eq!(localized.downloaded, 1);
    assert_eq!(localized.reused, 1);
    assert_eq!(localized.fetch_failures.len(), 1);
    assert_eq!(fs::read(root.join("images/cover.png")).unwrap(), b"cover");

    assert_eq!(
        fs::read_to_string(&post).unwrap(),
        "---\ntitle: Rust\npublished: 2024-03-05\ndescription: 'Rust''s ownership'\n---\n![c](./images/cover.png)\n![x](https://cdn.example.com/x.png)\n"
    );
    // Nested drafts are localized but neither requoted nor renamed.
    assert_eq!(
        fs::read_to_string(root.join("drafts/wip post.md")).unwrap(),
        "---\ndescription: \"draft\"\n---\n![c](./images/cover.png)\n"
    );

    assert!(normalize::run(&cfg, false).unwrap().documents_fixed.is_empty());
    assert!(rename::run(&cfg, false).unwrap().renamed.is_empty());
    let again = localize::run(&cfg, &OfflineFetcher).unwrap();
    assert!(again.documents_updated.is_empty());
    assert_eq!(again.downloaded, 0);
}

#[test]
fn missing_posts_dir_is_error_for_every_job() {
    let dir = tempdir().unwrap();
    let cfg = BlogtidyConfig::for_posts_dir(dir.path().join("nope"));

    assert!(normalize::run(&cfg, false).is_err());
    assert!(rename::run(&cfg, true).is_err());
    assert!(localize::run(&cfg, &OfflineFetcher).is_err());
    assert!(!dir.path().join("nope/images").exists());
}
