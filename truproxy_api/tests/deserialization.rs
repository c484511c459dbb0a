use serde_json::json;
use truproxy_api::types::{OfficersResponse, SearchResponse};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_search_full() {
    let json = load_fixture("search.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.total_results, Some(json!(3)));
    assert_eq!(resp.items.len(), 3);
    assert_eq!(resp.extra["kind"], "search#companies");

    let bbc = &resp.items[0];
    assert_eq!(bbc.company_number, "06500244");
    assert_eq!(bbc.extra["title"], "BBC LIMITED");
    assert!(bbc.is_active());
    assert_eq!(bbc.extra["address"]["postal_code"], "DN22 0AD");
    assert_eq!(bbc.extra["links"]["self"], "/company/06500244");

    assert!(!resp.items[1].is_active());
    assert!(resp.items[2].company_status.is_none());
    assert!(!resp.items[2].is_active());
}

#[test]
fn deserialize_search_without_total_results() {
    let json = load_fixture("search_empty.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    assert!(!resp.has_results());
    assert!(resp.items.is_empty());
}

#[test]
fn null_total_results_still_counts_as_results() {
    let json = load_fixture("search_null_total.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.has_results());
    assert_eq!(resp.total_results, Some(serde_json::Value::Null));
    assert_eq!(resp.items.len(), 1);
}

#[test]
fn search_round_trip_preserves_unknown_fields() {
    let json = load_fixture("search.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    let original: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(serde_json::to_value(&resp).unwrap(), original);
}

#[test]
fn irregular_items_round_trip_unchanged() {
    let json = load_fixture("search_irregular.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.items.len(), 2);
    assert_eq!(resp.items[0].extra["address"]["premises"], 12);
    assert_eq!(resp.items[1].company_number, "08888888");

    let original: serde_json::Value = serde_json::from_str(&json).unwrap();
    let written = serde_json::to_value(&resp).unwrap();
    assert_eq!(written, original);
    assert!(written["items"][0]["date_of_creation"].is_null());
    assert!(written["items"][0]["address"]
        .as_object()
        .unwrap()
        .contains_key("postal_code"));
}

#[test]
fn null_status_is_present_but_not_active() {
    let resp: SearchResponse = serde_json::from_value(json!({
        "total_results": 1,
        "items": [{ "company_number": "1", "company_status": null }]
    }))
    .unwrap();
    let company = &resp.items[0];
    assert_eq!(company.company_status, Some(serde_json::Value::Null));
    assert!(!company.is_active());
    assert_eq!(
        serde_json::to_value(company).unwrap(),
        json!({ "company_number": "1", "company_status": null })
    );
}

#[test]
fn deserialize_officers() {
    let json = load_fixture("officers.json");
    let resp: OfficersResponse = serde_json::from_str(&json).unwrap();
    let officers = resp.into_officers();
    assert_eq!(officers.len(), 4);

    let antles = &officers[0];
    assert_eq!(antles.name(), Some("ANTLES, Kerri"));
    assert_eq!(antles.extra["officer_role"], "director");
    assert_eq!(antles.extra["date_of_birth"]["year"], 1969);
    assert!(antles.is_active());

    assert_eq!(officers[1].resigned_on, Some(json!("2017-04-01")));
    assert!(!officers[1].is_active());

    // a resigned_on key counts even when its value is null
    assert_eq!(officers[2].resigned_on, Some(serde_json::Value::Null));
    assert!(!officers[2].is_active());

    // odd shapes in untyped fields do not break parsing
    assert_eq!(officers[3].extra["occupation"], 42);
    assert!(officers[3].is_active());
}

#[test]
fn officers_round_trip_unchanged() {
    let json = load_fixture("officers.json");
    let resp: OfficersResponse = serde_json::from_str(&json).unwrap();
    let original: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(serde_json::to_value(&resp).unwrap(), original);
}

#[test]
fn deserialize_officers_without_items() {
    let json = load_fixture("officers_none.json");
    let resp: OfficersResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.into_officers().is_empty());
}
