//! Order creation against a mocked Razorpay API.

use rzpay_common::{HttpStatusCode, OrderGateway, RzpayError};
use rzpay_config::RazorpayConfig;
use rzpay_razorpay::{RazorpayError, RazorpayOrderService};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{basic_auth, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str, timeout_secs: u64) -> RazorpayConfig {
    RazorpayConfig {
        key_id: "rzp_test_key".to_string(),
        key_secret: "rzp_test_secret".to_string(),
        base_url: base_url.to_string(),
        timeout_secs,
    }
}

fn sample_order() -> serde_json::Value {
    json!({
        "id": "order_IluGWxBm9U8zJ8",
        "entity": "order",
        "amount": 50000,
        "amount_paid": 0,
        "amount_due": 50000,
        "currency": "INR",
        "receipt": "some_receipt_id",
        "offer_id": null,
        "status": "created",
        "attempts": 0,
        "notes": [],
        "created_at": 1642662092
    })
}

#[tokio::test]
async fn test_create_order_sends_paise_and_returns_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .and(basic_auth("rzp_test_key", "rzp_test_secret"))
        .and(body_json(json!({
            "amount": 50000,
            "currency": "INR",
            "receipt": "some_receipt_id"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_order()))
        .expect(1)
        .mount(&server)
        .await;

    let service = RazorpayOrderService::new(test_config(&server.uri(), 5)).unwrap();
    let order = service.create_order(500).await.unwrap();

    assert_eq!(order, sample_order());
}

#[tokio::test]
async fn test_identical_requests_create_separate_orders() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_order()))
        .expect(2)
        .mount(&server)
        .await;

    let service = RazorpayOrderService::new(test_config(&server.uri(), 5)).unwrap();
    service.create_order(500).await.unwrap();
    service.create_order(500).await.unwrap();
}

#[tokio::test]
async fn test_api_error_maps_to_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "code": "BAD_REQUEST_ERROR",
                "description": "Authentication failed"
            }
        })))
        .mount(&server)
        .await;

    let service = RazorpayOrderService::new(test_config(&server.uri(), 5)).unwrap();
    let err = service.create_order(500).await.unwrap_err();

    assert_eq!(err.status_code(), 502);
    assert!(err.client_message().contains("Authentication failed"));
}

#[tokio::test]
async fn test_unparseable_success_body_is_a_gateway_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let service = RazorpayOrderService::new(test_config(&server.uri(), 5)).unwrap();
    let err = service.create_order(500).await.unwrap_err();

    assert!(matches!(err, RzpayError::GatewayError { .. }));
}

#[tokio::test]
async fn test_slow_gateway_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_order())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = test_config(&server.uri(), 1);
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    let err = rzpay_razorpay::create_order(&client, &config, 500)
        .await
        .unwrap_err();
    assert!(matches!(err, RazorpayError::Timeout(1)));

    let converted: RzpayError = err.into();
    assert_eq!(converted.status_code(), 504);
}

#[tokio::test]
async fn test_invalid_amount_never_reaches_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_order()))
        .expect(0)
        .mount(&server)
        .await;

    let service = RazorpayOrderService::new(test_config(&server.uri(), 5)).unwrap();
    let err = service.create_order(0).await.unwrap_err();

    assert!(matches!(err, RzpayError::ValidationError(_)));
}

#[tokio::test]
async fn test_unreachable_gateway_is_a_gateway_error() {
    // Nothing listens on port 9 in the test environment
    let service = RazorpayOrderService::new(test_config("http://127.0.0.1:9", 2)).unwrap();
    let err = service.create_order(500).await.unwrap_err();

    assert_eq!(err.status_code(), 502);
}
