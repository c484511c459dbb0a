//! Response envelopes wrapping the item lists.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{present, Company, Extra, Officer};

/// Body of `GET /Search`.
///
/// The registry omits `total_results` entirely when nothing matched, which is
/// how "no results" is told apart from an empty page. A present `null` still
/// counts as results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_results: Option<Value>,
    #[serde(default)]
    pub items: Vec<Company>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl SearchResponse {
    pub fn has_results(&self) -> bool {
        self.total_results.is_some()
    }
}

/// Body of `GET /Officers`. `items` is absent when the company has no officers on file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OfficersResponse {
    #[serde(default)]
    pub items: Option<Vec<Officer>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl OfficersResponse {
    pub fn into_officers(self) -> Vec<Officer> {
        self.items.unwrap_or_default()
    }
}
