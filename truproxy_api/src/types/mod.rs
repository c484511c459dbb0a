//! Wire types for the registry API.
//!
//! Records type only the fields the relay reasons about. Everything else is
//! collected into a flattened `extra` map and written back exactly as
//! received, nulls and odd shapes included.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Upstream fields that have no typed member on a record.
pub type Extra = Map<String, Value>;

mod company;
pub use self::company::{Company, EnrichedCompany, ACTIVE_STATUS};

mod officer;
pub use self::officer::Officer;

mod envelope;
pub use self::envelope::{OfficersResponse, SearchResponse};

/// Deserializes a field so that a present key is always `Some`, even when its
/// value is `null`. Pair with `#[serde(default)]` so a missing key is `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
