//! Image fetch error type.

/// Error returned by a single image fetch (curl transport failure or HTTP status).
/// Kept typed so the localizer can log timeouts and status codes distinctly.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, DNS, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Response status was not 200.
    #[error("HTTP {0}")]
    Http(u32),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Curl(e) if e.is_operation_timedout())
    }

    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Http(code) => Some(*code),
            FetchError::Curl(_) => None,
        }
    }
}
