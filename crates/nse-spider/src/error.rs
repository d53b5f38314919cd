use thiserror::Error;

/// Everything that can go wrong between the NSE endpoint and the files on disk.
#[derive(Debug, Error)]
pub enum SpiderError {
    /// Network failure, non-2xx status, or an undecodable response body.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The response parsed, but not into the shape the filter reads.
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

pub type Result<T> = std::result::Result<T, SpiderError>;
