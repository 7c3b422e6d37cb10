//! Integration tests for the exchange-rate provider using wiremock.
//!
//! These tests verify the provider's behavior against a mock HTTP server:
//! success payloads, API-reported failures, HTTP errors, and malformed JSON.

use convert_core::rates::exchangerate_api::ExchangeRateApiProvider;
use convert_core::{ConvertError, RateProvider};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const RATES_PATH: &str = "/v6/TESTKEY/latest/EUR";

fn sample_rates_response() -> serde_json::Value {
    serde_json::json!({
        "result": "success",
        "base_code": "EUR",
        "conversion_rates": {
            "USD": 1.09,
            "GBP": 0.85,
            "INR": 91.2,
            "JPY": 161.5,
            "AUD": 1.63,
            "CAD": 1.48
        }
    })
}

fn provider_for(mock_server: &MockServer) -> ExchangeRateApiProvider {
    ExchangeRateApiProvider::new(format!("{}{}", mock_server.uri(), RATES_PATH))
}

async fn mount_rates_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(RATES_PATH))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn fetch_rates_success() {
    let mock_server = MockServer::start().await;

    mount_rates_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_rates_response()),
    )
    .await;

    let provider = provider_for(&mock_server);
    let rates = provider.fetch_rates().await.expect("rates should parse");

    assert_eq!(rates.len(), 6);
    assert_eq!(rates.rate("USD"), Some(1.09));
    assert_eq!(rates.rate("JPY"), Some(161.5));
    assert_eq!(rates.rate("XYZ"), None);
}

#[tokio::test]
async fn api_reported_error_surfaces_its_error_type() {
    let mock_server = MockServer::start().await;

    mount_rates_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": "error",
            "error-type": "invalid-key"
        })),
    )
    .await;

    let provider = provider_for(&mock_server);
    let err = provider.fetch_rates().await.unwrap_err();

    assert!(
        matches!(&err, ConvertError::RateUnavailable(reason) if reason.contains("invalid-key")),
        "expected RateUnavailable with error-type, got: {err:?}"
    );
}

#[tokio::test]
async fn api_reported_error_without_error_type() {
    let mock_server = MockServer::start().await;

    mount_rates_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "result": "error" })),
    )
    .await;

    let provider = provider_for(&mock_server);
    let err = provider.fetch_rates().await.unwrap_err();

    assert!(
        matches!(&err, ConvertError::RateUnavailable(reason) if reason.contains("Unknown error")),
        "expected RateUnavailable with fallback reason, got: {err:?}"
    );
}

#[tokio::test]
async fn http_error_status_is_unavailable() {
    let mock_server = MockServer::start().await;

    mount_rates_mock(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let provider = provider_for(&mock_server);
    let err = provider.fetch_rates().await.unwrap_err();

    assert!(
        matches!(&err, ConvertError::RateUnavailable(reason) if reason.contains("500")),
        "expected RateUnavailable mentioning the status, got: {err:?}"
    );
}

#[tokio::test]
async fn http_error_with_long_non_ascii_body_is_unavailable() {
    let mock_server = MockServer::start().await;

    // An HTML-ish error page full of multi-byte characters, well past the
    // truncation limit.
    mount_rates_mock(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("€".repeat(100)),
    )
    .await;

    let provider = provider_for(&mock_server);
    let err = provider.fetch_rates().await.unwrap_err();

    assert!(
        matches!(&err, ConvertError::RateUnavailable(reason) if reason.contains("500")),
        "expected RateUnavailable mentioning the status, got: {err:?}"
    );
}

#[tokio::test]
async fn malformed_json_is_unavailable() {
    let mock_server = MockServer::start().await;

    mount_rates_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let provider = provider_for(&mock_server);
    let err = provider.fetch_rates().await.unwrap_err();

    assert!(
        matches!(err, ConvertError::RateUnavailable(_)),
        "expected RateUnavailable, got: {err:?}"
    );
}

#[tokio::test]
async fn success_without_rates_is_unavailable() {
    let mock_server = MockServer::start().await;

    mount_rates_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": "success",
            "conversion_rates": {}
        })),
    )
    .await;

    let provider = provider_for(&mock_server);
    let err = provider.fetch_rates().await.unwrap_err();

    assert!(
        matches!(&err, ConvertError::RateUnavailable(reason) if reason.contains("no conversion rates")),
        "expected RateUnavailable for empty table, got: {err:?}"
    );
}

#[tokio::test]
async fn engine_conversion_through_live_provider() {
    let mock_server = MockServer::start().await;

    mount_rates_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_rates_response()),
    )
    .await;

    let provider = provider_for(&mock_server);
    let result = convert_core::currency::convert_currency(&provider, 100.0, "GBP")
        .await
        .expect("conversion should succeed");

    assert!((result - 85.0).abs() < 1e-9);
}
