//! Blocking image download over HTTP(S).
//!
//! Uses the curl crate (libcurl) for a single GET per image with a
//! browser-like `User-Agent`, a `Referer` and a bounded total timeout. Runs in
//! the current thread; the localizer calls it once per distinct filename.

mod error;

pub use error::FetchError;

use crate::config::FetchConfig;
use std::time::Duration;

/// Upper bound on connection setup, never more than the total timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of image bytes. The localizer is generic over this so tests can
/// serve images without a network.
pub trait Fetcher {
    /// Fetch `url` and return the full response body of a 200 response.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// libcurl-backed fetcher configured from `[fetch]`.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    config: FetchConfig,
}

impl CurlFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let timeout = self.config.timeout();
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.config.max_redirects)?;
        easy.useragent(&self.config.user_agent)?;
        if !self.config.referer.is_empty() {
            easy.referer(&self.config.referer)?;
        }
        easy.connect_timeout(timeout.min(CONNECT_TIMEOUT))?;
        easy.timeout(timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if code != 200 {
            return Err(FetchError::Http(code));
        }
        tracing::debug!(url, bytes = body.len(), "fetched image");
        Ok(body)
    }
}
