use std::path::PathBuf;

use swup_core::error::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} when fetching {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reference path `{0}` points outside the document directory")]
    UnsafePath(String),

    #[error("invalid document from {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: ParseError,
    },
}
