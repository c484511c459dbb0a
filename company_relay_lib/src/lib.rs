//! Library layer for the company relay: filtering, query validation and the
//! officer enrichment fan-out on top of the `truproxy_api` client.
//!
//! Everything here is transport-agnostic; the HTTP surface lives in the
//! `company_relay` crate.

pub mod enrich;
pub mod error;
pub mod filter;
pub mod registry;
pub mod relay;
pub mod validation;

pub use truproxy_api;
pub use truproxy_api::types;
pub use truproxy_api::{ApiKey, Client, CompanyQuery};

pub use enrich::enrich_companies;
pub use error::RelayError;
pub use registry::CompanyRegistry;
pub use relay::{EnrichedSearch, Relay, SearchOutcome};
pub use validation::SearchRequest;
