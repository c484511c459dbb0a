//! HTTP client for the TruProxy company registry API.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    types::{Officer, OfficersResponse, SearchResponse},
    ApiKey, CompanyQuery, Error,
};

/// Production base URL of the registry's v1 company endpoints.
pub const DEFAULT_BASE_URL: &str =
    "https://exercise.trunarrative.cloud/TruProxyAPI/rest/Companies/v1";

/// Per-call timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the registry API.
///
/// Holds a single `reqwest::Client`, so clones of this client share one
/// connection pool and can be used from many tasks at once.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_api_url: String,
}

impl Client {
    /// Creates a client pointing at the production registry with the default timeout.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom base URL and per-call timeout.
    /// Used by configuration and for testing with wiremock.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, Error> {
        let mut url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str())?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    async fn get<T>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        api_key: &ApiKey,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path, params)?;
        tracing::debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .header("x-api-key", api_key.as_str())
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach registry: {}", e);
                Error::Network(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::warn!("Registry rejected API key with status {}", status);
            return Err(Error::Unauthorized {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::ParseFailed(e.to_string())
        })
    }

    /// Searches companies by name or number.
    ///
    /// Returns `Ok(None)` when the registry reports no matches (no `total_results`
    /// in the body). That is a normal outcome, not an error.
    pub async fn search(
        &self,
        query: &CompanyQuery,
        api_key: &ApiKey,
    ) -> Result<Option<SearchResponse>, Error> {
        let resp: SearchResponse = self
            .get("/Search", &[("Query", query.as_str())], api_key)
            .await?;
        if resp.has_results() {
            Ok(Some(resp))
        } else {
            tracing::debug!("No companies matched query {:?}", query.as_str());
            Ok(None)
        }
    }

    /// Lists every officer on file for a company, resigned ones included.
    ///
    /// A body without `items` yields an empty list.
    pub async fn list_officers(
        &self,
        company_number: &str,
        api_key: &ApiKey,
    ) -> Result<Vec<Officer>, Error> {
        let resp: OfficersResponse = self
            .get("/Officers", &[("CompanyNumber", company_number)], api_key)
            .await?;
        Ok(resp.into_officers())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_carries_encoded_params() {
        let client = Client::with_base_url("http://registry.test/v1/", DEFAULT_TIMEOUT).unwrap();
        let url = client.get_url("/Search", &[("Query", "Acme & Sons")]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://registry.test/v1/Search?Query=Acme+%26+Sons"
        );
    }

    #[test]
    fn truncate_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
        let long = "é".repeat(1500);
        let cut = truncate_body(&long);
        assert!(cut.ends_with("...[truncated]"));
    }
}
