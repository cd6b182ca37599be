use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}: {1}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Request to {url} timed out after {timeout:?}")]
    Timeout {
        url: String,
        timeout: Duration,
        #[source]
        source: reqwest::Error,
    },

    // Display of StatusCode is "<code> <reason>", e.g. "500 Internal Server Error"
    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Gzip decompression failed for {0}: {1}")]
    Decompression(String, #[source] std::io::Error),

    #[error("Error reading response body from {0}: {1}")]
    BodyRead(String, #[source] std::io::Error),
}
