use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to '{url}' failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to '{url}' returned non-success status {status}.")]
    UnexpectedStatus { url: String, status: u16 },
    #[error("Failed to read response body from '{url}': {source}")]
    ReadBodyFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[cfg(test)]
    #[error("Simulated failure for '{url}'.")]
    Simulated { url: String },
}

