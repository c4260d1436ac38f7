//! CLI for the blogtidy post maintenance jobs.

mod commands;

use anyhow::Result;
use blogtidy_core::config::{self, BlogtidyConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_fix_frontmatter, run_localize_images, run_rename_posts};

/// Top-level CLI for blogtidy.
#[derive(Debug, Parser)]
#[command(name = "blogtidy")]
#[command(about = "blogtidy: maintenance jobs for a Markdown blog's posts", long_about = None)]
pub struct Cli {
    /// Posts directory (overrides `posts_dir` from the config file).
    #[arg(long, global = true, value_name = "DIR")]
    pub posts_dir: Option<PathBuf>,

    /// Config file to use instead of ~/.config/blogtidy/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download remote images referenced by posts and link the local copies.
    LocalizeImages,

    /// Requote the description field from double to single quotes.
    FixFrontmatter {
        /// Report the posts that would change without writing them.
        #[arg(long)]
        dry_run: bool,
    },

    /// Rename posts to `<date>-<slug>.md`.
    RenamePosts {
        /// Print planned renames without moving any file.
        #[arg(long)]
        dry_run: bool,
    },
}

impl Cli {
    /// Config from `--config` (or the XDG default) with `--posts-dir` applied.
    pub fn load_config(&self) -> Result<BlogtidyConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        if let Some(dir) = &self.posts_dir {
            cfg.posts_dir = dir.clone();
        }
        Ok(cfg)
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::LocalizeImages => run_localize_images(&cfg)?,
            CliCommand::FixFrontmatter { dry_run } => run_fix_frontmatter(&cfg, dry_run)?,
            CliCommand::RenamePosts { dry_run } => run_rename_posts(&cfg, dry_run)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
