//! The two relay pipelines: batch search with enrichment, and single company lookup.

use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::Value;
use truproxy_api::types::{EnrichedCompany, Extra};
use truproxy_api::{ApiKey, CompanyQuery};

use crate::enrich::{enrich_companies, enrich_company};
use crate::error::RelayError;
use crate::filter::retain_active_companies;
use crate::registry::CompanyRegistry;
use crate::validation::SearchRequest;

/// A search page whose companies carry their active officers.
///
/// Serializes like the registry's own search envelope, with `items`
/// replaced by the enriched companies. `total_results` is passed through as
/// received unless the active-only filter rewrote it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnrichedSearch {
    pub total_results: Value,
    pub items: Vec<EnrichedCompany>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Result of a batch search.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// The registry matched nothing. Serializes as `[]`.
    NoResults,
    Found(EnrichedSearch),
}

impl SearchOutcome {
    /// Enriched companies in registry order; empty for [`SearchOutcome::NoResults`].
    pub fn companies(&self) -> &[EnrichedCompany] {
        match self {
            Self::NoResults => &[],
            Self::Found(search) => &search.items,
        }
    }
}

impl Serialize for SearchOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NoResults => serializer.collect_seq(std::iter::empty::<EnrichedCompany>()),
            Self::Found(search) => search.serialize(serializer),
        }
    }
}

/// Runs relay requests against a [`CompanyRegistry`].
///
/// Cheap to clone; clones share the registry.
pub struct Relay<R> {
    registry: Arc<R>,
}

impl<R> Clone for Relay<R> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<R: CompanyRegistry> Relay<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Searches the registry and attaches active officers to every match.
    ///
    /// With `active_only`, companies whose status is not `active` are dropped
    /// and `total_results` is recomputed before any officer lookup runs.
    /// A search with no matches returns [`SearchOutcome::NoResults`] without
    /// making any officer lookups.
    pub async fn search_and_enrich(
        &self,
        request: &SearchRequest,
        active_only: bool,
        api_key: &ApiKey,
    ) -> Result<SearchOutcome, RelayError> {
        let query = request.query()?;
        tracing::info!(
            "Searching registry for {:?} (active_only={})",
            query.as_str(),
            active_only
        );

        let Some(mut page) = self.registry.search(&query, api_key).await? else {
            return Ok(SearchOutcome::NoResults);
        };

        if active_only {
            page = retain_active_companies(page);
        }

        let total_results = page.total_results.unwrap_or(Value::Null);
        let items = enrich_companies(Arc::clone(&self.registry), page.items, api_key).await;

        Ok(SearchOutcome::Found(EnrichedSearch {
            total_results,
            items,
            extra: page.extra,
        }))
    }

    /// Looks up one company by number and attaches its active officers.
    ///
    /// The registry search is fuzzy, so several companies can come back; the
    /// first one is taken. Returns `Ok(None)` when nothing matched.
    pub async fn company_with_officers(
        &self,
        company_number: &str,
        api_key: &ApiKey,
    ) -> Result<Option<EnrichedCompany>, RelayError> {
        let query = CompanyQuery::new(company_number).ok_or(RelayError::InvalidQuery)?;
        tracing::info!("Looking up company {:?}", query.as_str());

        let Some(page) = self.registry.search(&query, api_key).await? else {
            return Ok(None);
        };

        let Some(company) = page.items.into_iter().next() else {
            tracing::warn!(
                "Registry reported results for {:?} but returned no items",
                query.as_str()
            );
            return Ok(None);
        };

        let enriched = enrich_company(self.registry.as_ref(), company, api_key).await;
        Ok(Some(enriched))
    }
}
