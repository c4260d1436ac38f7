//! Tests for config loading through the global options.

use super::parse_cli;
use std::fs;
use std::path::PathBuf;

#[test]
fn explicit_config_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blogtidy.toml");
    fs::write(&path, "posts_dir = \"blog/posts\"\nlink_prefix = \"/img/\"\n").unwrap();

    let cli = parse_cli(&["blogtidy", "--config", path.to_str().unwrap(), "fix-frontmatter"]);
    let cfg = cli.load_config().unwrap();

    assert_eq!(cfg.posts_dir, PathBuf::from("blog/posts"));
    assert_eq!(cfg.link_prefix, "/img/");
}

#[test]
fn posts_dir_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blogtidy.toml");
    fs::write(&path, "posts_dir = \"blog/posts\"\n").unwrap();

    let cli = parse_cli(&[
        "blogtidy",
        "--config",
        path.to_str().unwrap(),
        "--posts-dir",
        "other",
        "rename-posts",
    ]);
    let cfg = cli.load_config().unwrap();

    assert_eq!(cfg.posts_dir, PathBuf::from("other"));
}

#[test]
fn missing_config_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let cli = parse_cli(&["blogtidy", "--config", path.to_str().unwrap(), "localize-images"]);

    assert!(cli.load_config().is_err());
}

#[test]
fn malformed_config_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "date_fields = \"published\"\n").unwrap();

    let cli = parse_cli(&["blogtidy", "--config", path.to_str().unwrap(), "localize-images"]);

    assert!(cli.load_config().is_err());
}
