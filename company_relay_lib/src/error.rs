//! Error types for the library layer.

use thiserror::Error;

/// Errors produced by the relay pipelines.
///
/// Only failures that end a request appear here. "No results" is a normal
/// outcome and officer lookup failures are absorbed by the fan-out.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Neither a company name nor a company number was supplied.
    #[error("Invalid query param")]
    InvalidQuery,
    /// The primary registry search failed.
    #[error("Registry unavailable: {0}")]
    Upstream(#[from] truproxy_api::Error),
}

impl RelayError {
    /// True when the registry refused the caller's API key.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::Upstream(truproxy_api::Error::Unauthorized { .. })
        )
    }
}
