// --- File: crates/rzpay_razorpay/src/logic.rs ---
use reqwest::Client;
use rzpay_common::OrderConfirmation;
use rzpay_config::RazorpayConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::error::RazorpayError;

/// Every order is created in rupees.
pub const ORDER_CURRENCY: &str = "INR";

/// Placeholder receipt sent with every order. It is not unique per order.
pub const ORDER_RECEIPT: &str = "some_receipt_id";

/// Paise per rupee.
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

const ORDERS_PATH: &str = "/v1/orders";

// --- Data Structures ---

/// Body of `POST /v1/orders`.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct CreateOrderPayload<'a> {
    /// Amount in paise.
    pub amount: i64,
    pub currency: &'a str,
    pub receipt: &'a str,
}

// Razorpay wraps failures as {"error": {"code": "...", "description": "..."}}
#[derive(Deserialize, Debug)]
struct RazorpayErrorBody {
    error: RazorpayErrorDetail,
}

#[derive(Deserialize, Debug)]
struct RazorpayErrorDetail {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

// --- Core Logic Functions ---

/// Converts a rupee amount to paise.
///
/// Rejects non-positive amounts and amounts whose paise value overflows.
pub fn to_minor_units(amount: i64) -> Result<i64, RazorpayError> {
    if amount <= 0 {
        return Err(RazorpayError::InvalidAmount(amount));
    }
    amount
        .checked_mul(MINOR_UNITS_PER_MAJOR)
        .ok_or(RazorpayError::InvalidAmount(amount))
}

/// Builds the order payload for a rupee amount.
pub fn build_order_payload(amount: i64) -> Result<CreateOrderPayload<'static>, RazorpayError> {
    Ok(CreateOrderPayload {
        amount: to_minor_units(amount)?,
        currency: ORDER_CURRENCY,
        receipt: ORDER_RECEIPT,
    })
}

/// Creates an order on Razorpay and returns the order object exactly as Razorpay sent it.
///
/// # Arguments
/// * `client` - HTTP client; its timeout bounds the call.
/// * `config` - Credentials, base URL and the timeout used for error reporting.
/// * `amount` - Amount in rupees.
pub async fn create_order(
    client: &Client,
    config: &RazorpayConfig,
    amount: i64,
) -> Result<OrderConfirmation, RazorpayError> {
    if config.key_id.is_empty() || config.key_secret.is_empty() {
        return Err(RazorpayError::ConfigError(
            "Razorpay key id or secret is empty".to_string(),
        ));
    }

    let payload = build_order_payload(amount)?;
    let api_url = format!("{}{}", config.base_url.trim_end_matches('/'), ORDERS_PATH);

    debug!(
        amount_paise = payload.amount,
        currency = payload.currency,
        "Creating Razorpay order"
    );

    let response = client
        .post(&api_url)
        .basic_auth(&config.key_id, Some(&config.key_secret))
        .json(&payload)
        .send()
        .await
        .map_err(|e| classify_transport_error(e, config.timeout_secs))?;

    let status = response.status();
    let body_text = response
        .text()
        .await
        .map_err(|e| classify_transport_error(e, config.timeout_secs))?;

    if !status.is_success() {
        let message = extract_error_message(&body_text);
        error!(
            "Razorpay order creation failed with HTTP status {}: {}",
            status, message
        );
        return Err(RazorpayError::ApiError {
            status_code: status.as_u16(),
            message,
        });
    }

    let order: OrderConfirmation = serde_json::from_str(&body_text)?;
    info!(
        order_id = order.get("id").and_then(|id| id.as_str()).unwrap_or("<none>"),
        "Razorpay order created"
    );
    Ok(order)
}

fn classify_transport_error(err: reqwest::Error, timeout_secs: u64) -> RazorpayError {
    if err.is_timeout() {
        error!("Razorpay request timed out after {}s", timeout_secs);
        RazorpayError::Timeout(timeout_secs)
    } else {
        error!("Razorpay request failed: {}", err);
        RazorpayError::RequestError(err)
    }
}

/// Picks the most useful message out of an error response body.
fn extract_error_message(body_text: &str) -> String {
    match serde_json::from_str::<RazorpayErrorBody>(body_text) {
        Ok(body) => body
            .error
            .description
            .or(body.error.code)
            .unwrap_or_else(|| body_text.to_string()),
        Err(_) if body_text.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body_text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_minor_units() {
        assert_eq!(to_minor_units(500).unwrap(), 50_000);
        assert_eq!(to_minor_units(1).unwrap(), 100);
    }

    #[test]
    fn test_to_minor_units_rejects_non_positive() {
        assert!(matches!(
            to_minor_units(0),
            Err(RazorpayError::InvalidAmount(0))
        ));
        assert!(matches!(
            to_minor_units(-5),
            Err(RazorpayError::InvalidAmount(-5))
        ));
    }

    #[test]
    fn test_to_minor_units_rejects_overflow() {
        assert!(matches!(
            to_minor_units(i64::MAX),
            Err(RazorpayError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_order_payload_shape() {
        let payload = build_order_payload(500).unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "amount": 50000, "currency": "INR", "receipt": "some_receipt_id" })
        );
    }

    #[test]
    fn test_extract_error_message() {
        let body = r#"{"error":{"code":"BAD_REQUEST_ERROR","description":"The amount must be atleast INR 1.00"}}"#;
        assert_eq!(
            extract_error_message(body),
            "The amount must be atleast INR 1.00"
        );

        let body = r#"{"error":{"code":"BAD_REQUEST_ERROR"}}"#;
        assert_eq!(extract_error_message(body), "BAD_REQUEST_ERROR");

        assert_eq!(extract_error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(extract_error_message(""), "empty response body");
    }
}
