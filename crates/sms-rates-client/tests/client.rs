//! Client SDK tests against a mocked sms-rates service.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sms_rates_client::{ClientError, QuoteParams, SmsRatesClient};
use sms_rates_core::MessageType;

#[tokio::test]
async fn quote_parses_a_successful_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/quote"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message_count": 9345,
            "message_type": "marketing",
            "destination_country": "IN",
            "country_name": "India",
            "destination_currency": "USD",
            "credit_in_destination": "100",
            "unit_cost": "0.0107"
        })))
        .mount(&server)
        .await;

    let client = SmsRatesClient::new(server.uri());
    let quote = client
        .quote(QuoteParams::new("100", "USD", "IN", MessageType::Marketing))
        .await
        .unwrap();

    assert_eq!(quote.message_count, 9345);
    assert_eq!(quote.country_name.as_deref(), Some("India"));
    assert_eq!(quote.unit_cost, "0.0107");
}

#[tokio::test]
async fn quote_maps_unable_to_compute() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/quote"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "error": {
                "code": "unable_to_compute",
                "message": "unknown country code: ZZ",
                "details": { "kind": "unknown_country" }
            }
        })))
        .mount(&server)
        .await;

    let client = SmsRatesClient::new(server.uri());
    let err = client
        .quote(QuoteParams::new("100", "USD", "ZZ", MessageType::Marketing))
        .await
        .unwrap_err();

    match err {
        ClientError::UnableToCompute { reason, kind } => {
            assert!(reason.contains("ZZ"));
            assert_eq!(kind.as_deref(), Some("unknown_country"));
        }
        other => panic!("expected UnableToCompute, got {other:?}"),
    }
}

#[tokio::test]
async fn get_rate_maps_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/rates/ZZ"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": {
                "code": "not_found",
                "message": "no rates for country: ZZ"
            }
        })))
        .mount(&server)
        .await;

    let client = SmsRatesClient::new(server.uri());
    let err = client.get_rate("ZZ").await.unwrap_err();

    assert!(matches!(err, ClientError::NotFound { .. }));
}

#[tokio::test]
async fn list_rates_parses_the_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rates": [
                {
                    "country": "AR",
                    "name": "Argentina",
                    "local_currency": "USD",
                    "utility": "0.0289",
                    "marketing": "0.0618"
                },
                {
                    "country": "UK",
                    "name": "UK",
                    "local_currency": "GBP",
                    "utility": "0.042",
                    "marketing": "0.072"
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = SmsRatesClient::new(server.uri());
    let listing = client.list_rates().await.unwrap();

    assert_eq!(listing.rates.len(), 2);
    assert_eq!(listing.rates[1].local_currency, "GBP");
}

#[tokio::test]
async fn unstructured_error_falls_back_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = SmsRatesClient::new(server.uri());
    let err = client.health().await.unwrap_err();

    match err {
        ClientError::Api { code, status, .. } => {
            assert_eq!(code, "unknown");
            assert_eq!(status, 500);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
