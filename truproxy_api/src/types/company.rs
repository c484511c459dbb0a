//! Company records returned by the `/Search` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{present, Extra, Officer};

/// The `company_status` value the registry uses for trading companies.
pub const ACTIVE_STATUS: &str = "active";

/// A company as listed in a registry search result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Registry-assigned company number. Identifies the company.
    pub company_number: String,

    /// Lifecycle status, e.g. `active` or `dissolved`. `Some` whenever the key is present.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub company_status: Option<Value>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Company {
    /// True when the status field is present and equals `active`.
    pub fn is_active(&self) -> bool {
        matches!(&self.company_status, Some(Value::String(status)) if status == ACTIVE_STATUS)
    }
}

/// A company with its currently active officers attached.
///
/// Serializes as the upstream company object with an added `officers` array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnrichedCompany {
    #[serde(flatten)]
    pub company: Company,
    pub officers: Vec<Officer>,
}

impl EnrichedCompany {
    pub fn new(company: Company, officers: Vec<Officer>) -> Self {
        Self { company, officers }
    }
}
