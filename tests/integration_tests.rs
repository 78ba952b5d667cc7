//! End-to-end tests for the Alma client
//!
//! Exercise the public accessors against a mock server: singleton lookups,
//! multi-page full retrieval with typed decoding, the no-result path, and
//! error propagation.

use almanaut::{AlmaClient, ApiErrorKind, ClientConfig, Error};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::collections::HashMap;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(host: &str) -> AlmaClient {
    AlmaClient::with_config(ClientConfig::builder("test-key").host(host).build()).unwrap()
}

fn license_json(code: &str) -> Value {
    json!({
        "link": format!("https://example.com/almaws/v1/acq/licenses/{code}"),
        "code": code,
        "name": format!("License {code}"),
        "type": {"value": "LICENSE", "desc": "License"},
        "status": {"value": "ACTIVE", "desc": "Active"},
        "licensor": {"value": "VEND1"},
        "start_date": "2022-01-01Z",
        "review_status": {"value": "ACCEPTED", "desc": "Accepted"}
    })
}

#[tokio::test]
async fn test_get_license_decodes_singleton_payload() {
    let mock_server = MockServer::start().await;

    // Singleton payloads carry no total_record_count.
    Mock::given(method("GET"))
        .and(path("/almaws/v1/acq/licenses/LIC-1"))
        .and(query_param("apikey", "test-key"))
        .and(query_param("limit", "1"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(license_json("LIC-1")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let license = client(&mock_server.uri())
        .get_license("LIC-1")
        .await
        .unwrap()
        .expect("license should be present");

    assert_eq!(license.code, "LIC-1");
    assert_eq!(
        license.start_date,
        NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
    );
}

#[tokio::test]
async fn test_get_licenses_merges_pages_before_decoding() {
    let mock_server = MockServer::start().await;

    let page_one: Vec<Value> = (0..5).map(|i| license_json(&format!("LIC-{i}"))).collect();
    let page_two: Vec<Value> = (5..12).map(|i| license_json(&format!("LIC-{i}"))).collect();

    Mock::given(method("GET"))
        .and(path("/almaws/v1/acq/licenses"))
        .and(query_param("limit", "5"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_record_count": 12,
            "license": page_one
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/almaws/v1/acq/licenses"))
        .and(query_param("limit", "50"))
        .and(query_param("offset", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_record_count": 12,
            "license": page_two
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let licenses = client(&mock_server.uri())
        .get_licenses(5, true, HashMap::new())
        .await
        .unwrap()
        .expect("licenses should be present");

    assert_eq!(licenses.total_record_count, 12);
    assert_eq!(licenses.licenses.len(), 12);
    // Offset order survives the merge and the typed decode.
    assert_eq!(licenses.licenses[0].code, "LIC-0");
    assert_eq!(licenses.licenses[11].code, "LIC-11");
}

#[tokio::test]
async fn test_get_licenses_limit_only_makes_one_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/almaws/v1/acq/licenses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_record_count": 300,
            "license": [license_json("LIC-0"), license_json("LIC-1")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let licenses = client(&mock_server.uri())
        .get_licenses(2, false, HashMap::new())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(licenses.total_record_count, 300);
    assert_eq!(licenses.licenses.len(), 2);
}

fn fund_json(id: &str) -> Value {
    json!({
        "id": id,
        "link": format!("https://example.com/almaws/v1/acq/funds/{id}"),
        "code": format!("FUND-{id}"),
        "name": format!("Fund {id}"),
        "type": {"value": "ALLOCATED", "desc": "Allocated"},
        "entity_type": {"value": "FUND", "desc": "Fund"},
        "owner": {"value": "MAIN", "desc": "Main Library"},
        "status": {"value": "ACTIVE", "desc": "Active"},
        "fiscal_period": {"value": "2022", "desc": "FY 2022"},
        "currency": {"value": "CAD"},
        "allocated_balance": 1000.0,
        "expended_balance": 250.0,
        "cash_balance": 750.0,
        "encumbered_balance": 100.0,
        "available_balance": 650.0,
        "available_for_library": [{"value": "MAIN", "desc": "Main Library"}],
        "parent": {"value": 1, "link": "https://example.com/almaws/v1/acq/funds/1"},
        "overencumbrance_allowed": {"value": "true", "desc": "Yes"},
        "overexpenditure_allowed": {"value": "false", "desc": "No"},
        "overencumbrance_warning_percent": 10,
        "overexpenditure_warning_sum": 0.0,
        "overencumbrance_limit_percent": 20,
        "overexpenditure_limit_sum": 0.0,
        "encumbrances_prior_to_fiscal_period": 0,
        "expenditures_prior_to_fiscal_period": 0,
        "transfers_prior_to_fiscal_period": 0,
        "fiscal_period_end_encumbrance_grace_period": 0,
        "fiscal_period_end_expenditure_grace_period": 0
    })
}

#[tokio::test]
async fn test_get_funds_decodes_collection_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/almaws/v1/acq/funds"))
        .and(query_param("view", "full"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_record_count": 2,
            "fund": [fund_json("1"), fund_json("2")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let funds = client(&mock_server.uri())
        .get_funds(10, false, HashMap::new())
        .await
        .unwrap()
        .expect("funds should be present");

    assert_eq!(funds.total_record_count, 2);
    assert_eq!(funds.funds.len(), 2);
    assert_eq!(funds.funds[0].code, "FUND-1");
    assert_eq!(funds.funds[1].available_balance, 650.0);
}

#[tokio::test]
async fn test_zero_matches_returns_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/almaws/v1/acq/funds"))
        .and(query_param("view", "full"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_record_count": 0
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let funds = client(&mock_server.uri())
        .get_funds(5, true, HashMap::new())
        .await
        .unwrap();
    assert!(funds.is_none());
}

#[tokio::test]
async fn test_api_error_reaches_the_caller_classified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/almaws/v1/acq/po-lines"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": -40166419,
                "message": "No valid options for parameter",
                "data": {}
            }
        })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server.uri())
        .get_po_lines(5, false, HashMap::new())
        .await
        .unwrap_err();

    assert_eq!(err.api_kind(), Some(ApiErrorKind::NoValidOptionsParameter));
}

#[tokio::test]
async fn test_decode_failure_propagates_after_merge() {
    let mock_server = MockServer::start().await;

    let mut bad = license_json("LIC-BAD");
    bad["start_date"] = json!("not-a-date");

    Mock::given(method("GET"))
        .and(path("/almaws/v1/acq/licenses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_record_count": 1,
            "license": [bad]
        })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server.uri())
        .get_licenses(5, false, HashMap::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_extra_params_pass_through_to_the_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/almaws/v1/acq/po-lines"))
        .and(query_param("status", "ACTIVE"))
        .and(query_param("q", "title~spenser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_record_count": 0
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut extra = HashMap::new();
    extra.insert("status".to_string(), "ACTIVE".to_string());
    extra.insert("q".to_string(), "title~spenser".to_string());

    let po_lines = client(&mock_server.uri())
        .get_po_lines(5, false, extra)
        .await
        .unwrap();
    assert!(po_lines.is_none());
}
