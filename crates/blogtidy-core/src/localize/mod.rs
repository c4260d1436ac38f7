//! Link localizer: download remote images referenced by posts and point the
//! links at the local copies.
//!
//! Best-effort batch job. A failed fetch leaves that link untouched and the
//! run continues with the next reference; a document is written back only
//! when its body actually changed.

mod links;

pub use links::{network_image_refs, ImageRef};

use anyhow::{Context, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::BlogtidyConfig;
use crate::document::Document;
use crate::fetch::Fetcher;
use crate::scan::{self, Depth};
use crate::storage;
use crate::url_model::local_image_filename;

/// A reference whose image could not be cached; its link was left as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub document: PathBuf,
    pub url: String,
    pub reason: String,
}

/// Outcome of one localizer run.
#[derive(Debug, Default)]
pub struct LocalizeReport {
    pub documents_scanned: usize,
    pub documents_updated: Vec<PathBuf>,
    /// Images fetched and written during this run.
    pub downloaded: usize,
    /// References served by an image already in the image directory.
    pub reused: usize,
    /// URL occurrences replaced across all bodies.
    pub links_rewritten: usize,
    pub fetch_failures: Vec<FetchFailure>,
    pub document_failures: Vec<(PathBuf, String)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CacheState {
    Ready,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cached {
    Downloaded,
    Reused,
}

struct Localizer<'a, F: Fetcher> {
    fetcher: &'a F,
    image_dir: PathBuf,
    link_prefix: &'a str,
    /// Local filenames attempted this run; at most one fetch per name.
    attempted: HashMap<String, CacheState>,
}

/// Localize network images for every `.md` file under `config.posts_dir` (recursive).
pub fn run<F: Fetcher>(config: &BlogtidyConfig, fetcher: &F) -> Result<LocalizeReport> {
    let files = scan::markdown_files(&config.posts_dir, Depth::Recursive)?;
    let image_dir = config.image_dir_path();
    fs::create_dir_all(&image_dir)
        .with_context(|| format!("create image dir {}", image_dir.display()))?;

    let mut localizer = Localizer {
        fetcher,
        image_dir,
        link_prefix: &config.link_prefix,
        attempted: HashMap::new(),
    };
    let mut report = LocalizeReport::default();

    for path in files {
        report.documents_scanned += 1;
        match localizer.process_document(&path, &mut report) {
            Ok(true) => {
                tracing::info!("updated {}", path.display());
                report.documents_updated.push(path);
            }
            Ok(false) => {}
            Err(e) => {
                tracing::warn!("failed to process {}: {:#}", path.display(), e);
                report.document_failures.push((path, format!("{:#}", e)));
            }
        }
    }

    Ok(report)
}

impl<'a, F: Fetcher> Localizer<'a, F> {
    /// Returns true if the document was rewritten.
    fn process_document(&mut self, path: &Path, report: &mut LocalizeReport) -> Result<bool> {
        let original =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let mut doc = Document::parse(&original);

        let refs = network_image_refs(doc.body());
        if refs.is_empty() {
            return Ok(false);
        }
        tracing::debug!("{}: {} network image(s)", path.display(), refs.len());
        for r in &refs {
            tracing::debug!(alt = %r.alt, url = %r.url, "image reference");
        }

        // Longest first so a URL that prefixes another cannot clobber it.
        let mut urls: Vec<String> = refs
            .into_iter()
            .map(|r| r.url)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        urls.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut body = doc.body().to_string();
        for url in urls {
            let name = local_image_filename(&url);
            match self.ensure_cached(&url, &name) {
                Ok(cached) => {
                    match cached {
                        Cached::Downloaded => report.downloaded += 1,
                        Cached::Reused => report.reused += 1,
                    }
                    let new_link = format!("{}{}", self.link_prefix, name);
                    report.links_rewritten += body.matches(url.as_str()).count();
                    body = body.replace(url.as_str(), &new_link);
                }
                Err(reason) => {
                    tracing::warn!(url = %url, "image not localized: {}", reason);
                    report.fetch_failures.push(FetchFailure {
                        document: path.to_path_buf(),
                        url,
                        reason,
                    });
                }
            }
        }

        doc.set_body(body);
        storage::write_if_changed(path, &original, &doc.render())
    }

    /// Make sure `<image_dir>/<name>` exists, fetching `url` if needed.
    fn ensure_cached(&mut self, url: &str, name: &str) -> Result<Cached, String> {
        match self.attempted.get(name) {
            Some(CacheState::Ready) => return Ok(Cached::Reused),
            Some(CacheState::Failed) => {
                return Err(format!("earlier fetch of {} failed in this run", name))
            }
            None => {}
        }

        let dest = self.image_dir.join(name);
        if dest.exists() {
            tracing::debug!("cached: {}", dest.display());
            self.attempted.insert(name.to_string(), CacheState::Ready);
            return Ok(Cached::Reused);
        }

        tracing::info!(url, dest = %dest.display(), "downloading image");
        let result = match self.fetcher.fetch(url) {
            Ok(bytes) => storage::write_atomic(&dest, &bytes).map_err(|e| format!("{:#}", e)),
            Err(e) if e.is_timeout() => Err(format!("timed out: {}", e)),
            Err(e) => Err(e.to_string()),
        };

        match result {
            Ok(()) => {
                self.attempted.insert(name.to_string(), CacheState::Ready);
                Ok(Cached::Downloaded)
            }
            Err(reason) => {
                self.attempted.insert(name.to_string(), CacheState::Failed);
                Err(reason)
            }
        }
    }
}
