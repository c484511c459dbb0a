//! Officer enrichment fan-out.
//!
//! One officer lookup is spawned per company on a `JoinSet`. Each task
//! reports back with the index of its company, so results land in a
//! fixed-size slot vector and the output keeps the input order no matter
//! which lookup finishes first.

use std::sync::Arc;

use tokio::task::JoinSet;
use truproxy_api::types::{Company, EnrichedCompany, Officer};
use truproxy_api::ApiKey;

use crate::filter::filter_active;
use crate::registry::CompanyRegistry;

/// Message sent from a lookup task back to the merge loop.
struct OfficerLookup {
    index: usize,
    company_number: String,
    result: Result<Vec<Officer>, truproxy_api::Error>,
}

/// Attaches the active officers to every company, fetching them concurrently.
///
/// Output has the same length and order as `companies`. A failed lookup
/// (transport error, bad body, panicked task) leaves that company with an
/// empty officer list and does not disturb the other lookups.
pub async fn enrich_companies<R>(
    registry: Arc<R>,
    companies: Vec<Company>,
    api_key: &ApiKey,
) -> Vec<EnrichedCompany>
where
    R: CompanyRegistry,
{
    if companies.is_empty() {
        return Vec::new();
    }

    let mut slots: Vec<Vec<Officer>> = vec![Vec::new(); companies.len()];
    let mut join_set = JoinSet::new();

    for (index, company) in companies.iter().enumerate() {
        let registry = Arc::clone(&registry);
        let company_number = company.company_number.clone();
        let api_key = api_key.clone();

        join_set.spawn(async move {
            let result = registry.list_officers(&company_number, &api_key).await;
            OfficerLookup {
                index,
                company_number,
                result,
            }
        });
    }

    let mut failed = 0usize;
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok(OfficerLookup {
                index,
                result: Ok(officers),
                ..
            }) => {
                slots[index] = filter_active(officers);
            }
            Ok(OfficerLookup {
                company_number,
                result: Err(err),
                ..
            }) => {
                tracing::warn!(
                    "Officer lookup for company {} failed, returning no officers: {}",
                    company_number,
                    err
                );
                failed += 1;
            }
            Err(err) => {
                tracing::warn!("Officer lookup task did not complete: {}", err);
                failed += 1;
            }
        }
    }

    tracing::debug!(
        "Enriched {} companies ({} officer lookups failed)",
        companies.len(),
        failed
    );

    companies
        .into_iter()
        .zip(slots)
        .map(|(company, officers)| EnrichedCompany::new(company, officers))
        .collect()
}

/// Fetches and attaches the active officers of a single company.
///
/// Same failure policy as [`enrich_companies`], without spawning.
pub async fn enrich_company<R>(
    registry: &R,
    company: Company,
    api_key: &ApiKey,
) -> EnrichedCompany
where
    R: CompanyRegistry,
{
    let officers = match registry.list_officers(&company.company_number, api_key).await {
        Ok(officers) => filter_active(officers),
        Err(err) => {
            tracing::warn!(
                "Officer lookup for company {} failed, returning no officers: {}",
                company.company_number,
                err
            );
            Vec::new()
        }
    };
    EnrichedCompany::new(company, officers)
}
