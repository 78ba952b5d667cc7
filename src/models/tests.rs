//! Decode tests for the resource schemas

use super::acquisitions::{Amount, Fund, Funds, License, Licenses};
use super::electronic::Portfolios;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn license_json(code: &str) -> Value {
    json!({
        "link": format!("https://example.com/almaws/v1/acq/licenses/{code}"),
        "code": code,
        "name": "Campus-wide journal access",
        "type": {"value": "LICENSE", "desc": "License"},
        "status": {"value": "ACTIVE", "desc": "Active"},
        "licensor": {"value": "VEND1", "desc": "Vendor One"},
        "start_date": "2022-01-01Z",
        "end_date": "2024-12-31Z",
        "review_status": {"value": "ACCEPTED", "desc": "Accepted"},
        "term": [
            {
                "code": {"value": "ILL", "desc": "Interlibrary loan"},
                "value": {"value": "PERMITTED", "desc": "Permitted"}
            }
        ],
        "note": [
            {
                "content": "Renewed early",
                "creation_date": "2022-03-15Z",
                "created_by": "admin",
                "type": {"value": "GENERAL"}
            }
        ]
    })
}

fn fund_json(id: &str) -> Value {
    json!({
        "id": id,
        "link": format!("https://example.com/almaws/v1/acq/funds/{id}"),
        "code": format!("CODE-{id}"),
        "name": format!("Fund {id}"),
        "entity_type": {"value": "FUND", "desc": "Fund"},
        "owner": {"value": "MAIN", "desc": "Main Library"},
        "status": {"value": "ACTIVE", "desc": "Active"},
        "fiscal_period": {"value": "2024", "desc": "FY2024"},
        "currency": {"value": "CAD"},
        "allocated_balance": 10000.0,
        "expended_balance": 2500.5,
        "cash_balance": 7499.5,
        "encumbered_balance": 1200.0,
        "available_balance": 6299.5,
        "available_for_library": [{"value": "MAIN", "desc": "Main Library"}],
        "parent": {"value": 1, "link": "https://example.com/almaws/v1/acq/funds/1"},
        "overencumbrance_allowed": {"value": "true", "desc": "Yes"},
        "overexpenditure_allowed": {"value": "false", "desc": "No"},
        "overencumbrance_warning_percent": 10,
        "overexpenditure_warning_sum": 500.0,
        "overencumbrance_limit_percent": 20,
        "overexpenditure_limit_sum": 1000.0,
        "encumbrances_prior_to_fiscal_period": 0,
        "expenditures_prior_to_fiscal_period": 0,
        "transfers_prior_to_fiscal_period": 0,
        "fiscal_period_end_encumbrance_grace_period": 30,
        "fiscal_period_end_expenditure_grace_period": 60
    })
}

#[test]
fn test_decode_license_normalizes_dates() {
    let license: License = serde_json::from_value(license_json("LIC-1")).unwrap();

    assert_eq!(license.code, "LIC-1");
    assert_eq!(
        license.start_date,
        NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
    );
    assert_eq!(license.end_date, NaiveDate::from_ymd_opt(2024, 12, 31));
    let notes = license.notes.unwrap();
    assert_eq!(
        notes[0].creation_date,
        NaiveDate::from_ymd_opt(2022, 3, 15).unwrap()
    );
    assert_eq!(license.terms.unwrap()[0].code.value, "ILL");
}

#[test]
fn test_decode_license_malformed_date_fails() {
    let mut raw = license_json("LIC-2");
    raw["start_date"] = json!("not-a-date");

    let result: Result<License, _> = serde_json::from_value(raw);
    assert!(result.is_err());
}

#[test]
fn test_decode_license_missing_required_field_fails() {
    let mut raw = license_json("LIC-3");
    raw.as_object_mut().unwrap().remove("status");

    let result: Result<License, _> = serde_json::from_value(raw);
    assert!(result.is_err());
}

#[test]
fn test_decode_ignores_unknown_fields() {
    let mut raw = license_json("LIC-4");
    raw["brand_new_api_field"] = json!({"surprise": true});

    let license: License = serde_json::from_value(raw).unwrap();
    assert_eq!(license.code, "LIC-4");
}

#[test]
fn test_decode_licenses_wrapper_alias() {
    let raw = json!({
        "total_record_count": 2,
        "license": [license_json("LIC-A"), license_json("LIC-B")]
    });

    let licenses: Licenses = serde_json::from_value(raw).unwrap();
    assert_eq!(licenses.total_record_count, 2);
    assert_eq!(licenses.licenses.len(), 2);
    assert_eq!(licenses.licenses[1].code, "LIC-B");
}

#[test]
fn test_decode_fund() {
    let fund: Fund = serde_json::from_value(fund_json("F1")).unwrap();
    assert_eq!(fund.code, "CODE-F1");
    assert_eq!(fund.parent.value, 1);
    assert!(fund.fund_type.is_none());
    assert_eq!(fund.available_for_libraries[0].value, "MAIN");
}

#[test]
fn test_decode_funds_wrapper() {
    let raw = json!({
        "total_record_count": 1,
        "fund": [fund_json("F9")]
    });
    let funds: Funds = serde_json::from_value(raw).unwrap();
    assert_eq!(funds.funds[0].id, "F9");
}

#[test]
fn test_amount_empty_string_sum_is_none() {
    let amount: Amount =
        serde_json::from_value(json!({"sum": "", "currency": {"value": "CAD"}})).unwrap();
    assert!(amount.sum.is_none());

    let amount: Amount =
        serde_json::from_value(json!({"sum": 12.5, "currency": {"value": "CAD"}})).unwrap();
    assert_eq!(amount.sum, Some(12.5));

    let amount: Amount =
        serde_json::from_value(json!({"sum": "42.0", "currency": {}})).unwrap();
    assert_eq!(amount.sum, Some(42.0));
}

#[test]
fn test_portfolios_total_record_count_may_be_null() {
    let raw = json!({
        "total_record_count": null,
        "portfolio": []
    });
    let portfolios: Portfolios = serde_json::from_value(raw).unwrap();
    assert!(portfolios.total_record_count.is_none());
    assert!(portfolios.portfolios.is_empty());
}
