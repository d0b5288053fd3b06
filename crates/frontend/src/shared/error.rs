//! Errors surfaced by backend requests.

use thiserror::Error;

/// Why a request to the pipeline server produced no payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request never completed (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),
    /// Server answered with a non-2xx status
    #[error("{url} answered with status {status}")]
    Status { status: u16, url: String },
    /// Body did not match the expected payload
    #[error("unexpected response body: {0}")]
    Decode(String),
}

pub type FetchResult<T> = Result<T, FetchError>;
