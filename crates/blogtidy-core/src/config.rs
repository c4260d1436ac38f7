use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Outbound request settings for image fetches (optional `[fetch]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// `User-Agent` sent with every image request. Some image hosts reject non-browser agents.
    pub user_agent: String,
    /// `Referer` sent with every image request (hotlink protection).
    pub referer: String,
    /// Upper bound for one request, connect through last body byte.
    pub timeout_secs: u64,
    /// Maximum number of redirects followed per request.
    pub max_redirects: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
            referer: "https://www.cnblogs.com/".to_string(),
            timeout_secs: 10,
            max_redirects: 10,
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Global configuration loaded from `~/.config/blogtidy/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogtidyConfig {
    /// Root directory holding the Markdown posts.
    pub posts_dir: PathBuf,
    /// Directory for localized images; relative paths are resolved against `posts_dir`.
    pub image_dir: PathBuf,
    /// Prefix written in front of the local filename when a link is rewritten.
    pub link_prefix: String,
    /// Frontmatter field whose double-quoted value is requoted by `fix-frontmatter`.
    pub description_field: String,
    /// Frontmatter fields checked in order for the date prefix used by `rename-posts`.
    pub date_fields: Vec<String>,
    pub fetch: FetchConfig,
}

impl Default for BlogtidyConfig {
    fn default() -> Self {
        Self {
            posts_dir: PathBuf::from("src/content/posts"),
            image_dir: PathBuf::from("images"),
            link_prefix: "./images/".to_string(),
            description_field: "description".to_string(),
            date_fields: vec!["published".to_string(), "date".to_string()],
            fetch: FetchConfig::default(),
        }
    }
}

impl BlogtidyConfig {
    /// Default config rooted at `posts_dir`. Mostly useful for tests and one-off runs.
    pub fn for_posts_dir(posts_dir: impl Into<PathBuf>) -> Self {
        Self {
            posts_dir: posts_dir.into(),
            ..Self::default()
        }
    }

    /// Absolute or posts-relative directory where localized images are stored.
    pub fn image_dir_path(&self) -> PathBuf {
        if self.image_dir.is_absolute() {
            self.image_dir.clone()
        } else {
            self.posts_dir.join(&self.image_dir)
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("blogtidy")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BlogtidyConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BlogtidyConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file. Missing keys take their defaults.
pub fn load_from_path(path: &Path) -> Result<BlogtidyConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: BlogtidyConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
