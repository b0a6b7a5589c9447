// --- File: crates/rzpay_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The message returned to clients for any request body that cannot be decoded.
pub const MALFORMED_BODY_MESSAGE: &str = "Cannot parse JSON";

/// The base error type for all rzpay errors.
///
/// Adapter crates define their own error enums and implement
/// `From<TheirError> for RzpayError`; handlers only ever return this type.
#[derive(Error, Debug)]
pub enum RzpayError {
    /// The request body could not be decoded into the expected shape
    #[error("{MALFORMED_BODY_MESSAGE}: {0}")]
    ParseError(String),

    /// The request decoded but carries values the service cannot accept
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The payment gateway failed or rejected the call
    #[error("Gateway error: {service_name} - {message}")]
    GatewayError {
        service_name: String,
        message: String,
    },

    /// The payment gateway did not answer in time
    #[error("Gateway timeout: {0}")]
    GatewayTimeout(String),

    /// The payment-record store failed or did not answer in time
    #[error("Store error: {0}")]
    StoreError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl RzpayError {
    /// The text placed in the `error` field of the response body.
    ///
    /// Malformed bodies always get the fixed message; the decoder detail is only logged.
    pub fn client_message(&self) -> String {
        match self {
            RzpayError::ParseError(_) => MALFORMED_BODY_MESSAGE.to_string(),
            RzpayError::InternalError(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for RzpayError {
    fn status_code(&self) -> u16 {
        match self {
            RzpayError::ParseError(_) => 400,
            RzpayError::ValidationError(_) => 400,
            RzpayError::ConfigError(_) => 500,
            RzpayError::GatewayError { .. } => 502,
            RzpayError::GatewayTimeout(_) => 504,
            RzpayError::StoreError(_) => 500,
            RzpayError::InternalError(_) => 500,
        }
    }
}

impl From<serde_json::Error> for RzpayError {
    fn from(err: serde_json::Error) -> Self {
        RzpayError::ParseError(err.to_string())
    }
}

pub fn validation_error<T: fmt::Display>(message: T) -> RzpayError {
    RzpayError::ValidationError(message.to_string())
}

pub fn gateway_error<T: fmt::Display>(service_name: &str, message: T) -> RzpayError {
    RzpayError::GatewayError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn store_error<T: fmt::Display>(message: T) -> RzpayError {
    RzpayError::StoreError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> RzpayError {
    RzpayError::InternalError(message.to_string())
}
