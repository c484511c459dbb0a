//! Request inputs shared by every registry call.

use std::fmt;

/// The free-text value sent as the `Query` parameter of a registry search.
///
/// The registry matches it against both company names and company numbers,
/// so a single type covers both lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanyQuery(String);

impl CompanyQuery {
    /// Wraps a raw search term. Empty terms are rejected.
    pub fn new(term: impl Into<String>) -> Option<Self> {
        let term = term.into();
        if term.is_empty() {
            None
        } else {
            Some(Self(term))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-supplied key forwarded verbatim in the `x-api-key` header.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
