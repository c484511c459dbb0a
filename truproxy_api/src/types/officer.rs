//! Officer records returned by the `/Officers` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{present, Extra};

/// A director, secretary or other appointment held at a company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Officer {
    /// Resignation date. `Some` whenever the key is present, `null` included.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub resigned_on: Option<Value>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Officer {
    /// An officer is active only while the record carries no `resigned_on` key.
    pub fn is_active(&self) -> bool {
        self.resigned_on.is_none()
    }

    /// The officer's `name`, when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }
}
