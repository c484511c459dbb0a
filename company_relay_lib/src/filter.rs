//! Pure filters over registry records.

use serde_json::Value;
use truproxy_api::types::{Company, Officer, SearchResponse};

/// Keeps only officers with no resignation date.
pub fn filter_active(officers: Vec<Officer>) -> Vec<Officer> {
    officers.into_iter().filter(Officer::is_active).collect()
}

/// Keeps only companies whose status is present and equals `active`.
pub fn filter_active_companies(companies: Vec<Company>) -> Vec<Company> {
    companies.into_iter().filter(Company::is_active).collect()
}

/// Applies [`filter_active_companies`] to a search page and rewrites
/// `total_results` to the number of companies left.
pub fn retain_active_companies(mut resp: SearchResponse) -> SearchResponse {
    let before = resp.items.len();
    resp.items = filter_active_companies(resp.items);
    resp.total_results = Some(Value::from(resp.items.len()));
    tracing::debug!(
        "Active-only filter kept {} of {} companies",
        resp.items.len(),
        before
    );
    resp
}
