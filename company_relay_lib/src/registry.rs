//! The seam between the relay pipelines and the registry API.

use std::future::Future;

use truproxy_api::types::{Officer, SearchResponse};
use truproxy_api::{ApiKey, Client, CompanyQuery, Error};

/// Read operations the relay needs from the company registry.
///
/// Implemented by [`truproxy_api::Client`]; tests swap in fakes to control
/// latency and failures.
pub trait CompanyRegistry: Send + Sync + 'static {
    /// Searches by name or number. `Ok(None)` means nothing matched.
    fn search(
        &self,
        query: &CompanyQuery,
        api_key: &ApiKey,
    ) -> impl Future<Output = Result<Option<SearchResponse>, Error>> + Send;

    /// Lists every officer on file for a company, resigned ones included.
    fn list_officers(
        &self,
        company_number: &str,
        api_key: &ApiKey,
    ) -> impl Future<Output = Result<Vec<Officer>, Error>> + Send;
}

impl CompanyRegistry for Client {
    async fn search(
        &self,
        query: &CompanyQuery,
        api_key: &ApiKey,
    ) -> Result<Option<SearchResponse>, Error> {
        Client::search(self, query, api_key).await
    }

    async fn list_officers(
        &self,
        company_number: &str,
        api_key: &ApiKey,
    ) -> Result<Vec<Officer>, Error> {
        Client::list_officers(self, company_number, api_key).await
    }
}
