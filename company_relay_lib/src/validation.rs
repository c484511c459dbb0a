//! Input validation for inbound relay requests.

use serde::{Deserialize, Serialize};
use truproxy_api::CompanyQuery;

use crate::error::RelayError;

/// Body of a batch search request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_number: Option<String>,
}

impl SearchRequest {
    /// Picks the registry query: the company number when present, otherwise
    /// the company name. An absent or empty choice is an invalid query.
    ///
    /// A present but empty number still wins over a name.
    pub fn query(&self) -> Result<CompanyQuery, RelayError> {
        self.company_number
            .as_deref()
            .or(self.company_name.as_deref())
            .and_then(CompanyQuery::new)
            .ok_or(RelayError::InvalidQuery)
    }
}

/// Reads a query-string flag: any non-empty value switches it on.
pub fn is_truthy(flag: Option<&str>) -> bool {
    flag.is_some_and(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, number: Option<&str>) -> SearchRequest {
        SearchRequest {
            company_name: name.map(str::to_string),
            company_number: number.map(str::to_string),
        }
    }

    #[test]
    fn name_only_uses_name() {
        let query = request(Some("Acme"), None).query().unwrap();
        assert_eq!(query.as_str(), "Acme");
    }

    #[test]
    fn number_only_uses_number() {
        let query = request(None, Some("123")).query().unwrap();
        assert_eq!(query.as_str(), "123");
    }

    #[test]
    fn number_wins_over_name() {
        let query = request(Some("Acme"), Some("123")).query().unwrap();
        assert_eq!(query.as_str(), "123");
    }

    #[test]
    fn neither_is_invalid() {
        assert!(matches!(
            request(None, None).query(),
            Err(RelayError::InvalidQuery)
        ));
    }

    #[test]
    fn empty_values_are_invalid() {
        assert!(request(Some(""), None).query().is_err());
        assert!(request(Some("Acme"), Some("")).query().is_err());
    }

    #[test]
    fn body_uses_camel_case_keys() {
        let body: SearchRequest =
            serde_json::from_str(r#"{"companyName":"Acme","companyNumber":"123"}"#).unwrap();
        assert_eq!(body, request(Some("Acme"), Some("123")));
        let empty: SearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SearchRequest::default());
    }

    #[test]
    fn truthy_flag() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some("")));
        assert!(is_truthy(Some("true")));
        assert!(is_truthy(Some("1")));
        // any non-empty string counts, including "false"
        assert!(is_truthy(Some("false")));
    }
}
