//! Rate listing integration tests.

mod common;

use axum::http::StatusCode;
use common::TestHarness;

#[tokio::test]
async fn list_rates_covers_every_country() {
    let harness = TestHarness::new();

    let response = harness.server.get("/v1/rates").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let rates = body["rates"].as_array().unwrap();
    assert_eq!(rates.len(), 21);
    // Sorted by country code
    assert_eq!(rates[0]["country"], "AR");
}

#[tokio::test]
async fn get_rate_for_one_country() {
    let harness = TestHarness::new();

    let response = harness.server.get("/v1/rates/IN").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["country"], "IN");
    assert_eq!(body["name"], "India");
    assert_eq!(body["local_currency"], "USD");
}

#[tokio::test]
async fn get_rate_normalizes_the_path_code() {
    let harness = TestHarness::new();

    let response = harness.server.get("/v1/rates/in").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["country"], "IN");
}

#[tokio::test]
async fn get_rate_unknown_country_is_not_found() {
    let harness = TestHarness::new();

    let response = harness.server.get("/v1/rates/ZZ").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn list_currencies_covers_the_exchange_table() {
    let harness = TestHarness::new();

    let response = harness.server.get("/v1/currencies").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let currencies = body["currencies"].as_array().unwrap();
    assert_eq!(currencies.len(), 4);
    let codes: Vec<_> = currencies
        .iter()
        .map(|c| c["currency"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["EUR", "GBP", "INR", "USD"]);
}
