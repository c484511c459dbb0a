//! Error types for the API client.

/// Errors that can occur when making registry API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (connect failure, timeout, bad URL).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The registry rejected the supplied API key (HTTP 401 or 403).
    #[error("Registry rejected the API key (HTTP {status})")]
    Unauthorized { status: u16 },
    /// The registry returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not the JSON we expected.
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
    /// The configured base URL could not be joined with an endpoint path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
