// --- File: crates/rzpay_razorpay/src/error.rs ---
use rzpay_common::{gateway_error, validation_error, HttpStatusCode, RzpayError};
use thiserror::Error;

/// Razorpay-specific error types.
#[derive(Error, Debug)]
pub enum RazorpayError {
    /// Error occurred during a Razorpay API request
    #[error("Razorpay API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Razorpay did not answer within the configured timeout
    #[error("Razorpay API did not respond within {0}s")]
    Timeout(u64),

    /// Error returned by the Razorpay API
    #[error("Razorpay API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing Razorpay API response
    #[error("Failed to parse Razorpay API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The requested amount cannot be turned into a valid order amount
    #[error("Invalid order amount: {0}")]
    InvalidAmount(i64),

    /// Missing or incomplete Razorpay configuration
    #[error("Razorpay configuration error: {0}")]
    ConfigError(String),
}

/// Convert RazorpayError to RzpayError
impl From<RazorpayError> for RzpayError {
    fn from(err: RazorpayError) -> Self {
        match err {
            RazorpayError::InvalidAmount(amount) => validation_error(format!(
                "amount must be a positive number of rupees, got {}",
                amount
            )),
            RazorpayError::Timeout(secs) => {
                RzpayError::GatewayTimeout(format!("Razorpay did not respond within {}s", secs))
            }
            RazorpayError::ConfigError(msg) => RzpayError::ConfigError(msg),
            other @ (RazorpayError::RequestError(_)
            | RazorpayError::ApiError { .. }
            | RazorpayError::ParseError(_)) => gateway_error("Razorpay", other),
        }
    }
}

impl HttpStatusCode for RazorpayError {
    fn status_code(&self) -> u16 {
        match self {
            RazorpayError::RequestError(_) => 502,
            RazorpayError::Timeout(_) => 504,
            RazorpayError::ApiError { .. } => 502,
            RazorpayError::ParseError(_) => 502,
            RazorpayError::InvalidAmount(_) => 400,
            RazorpayError::ConfigError(_) => 500,
        }
    }
}
