// --- File: crates/rzpay_common/src/lib.rs ---

pub mod error; // Error taxonomy and status mapping
pub mod http; // Axum glue: error responses, JSON extractor, outbound client
pub mod logging; // Subscriber setup
pub mod models; // Request and record types
pub mod services; // Gateway and store traits

// Re-export error types and utilities for easier access
pub use error::{
    gateway_error, internal_error, store_error, validation_error, HttpStatusCode, RzpayError,
    MALFORMED_BODY_MESSAGE,
};

// Re-export HTTP utilities for easier access
pub use http::{client::create_client, ApiJson, IntoHttpResponse};

pub use models::{OrderRequest, PaymentRecord};
pub use services::{
    BoxFuture, OrderConfirmation, OrderGateway, PaymentRecordStore, ServiceFactory,
};
