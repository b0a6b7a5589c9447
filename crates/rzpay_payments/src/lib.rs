// --- File: crates/rzpay_payments/src/lib.rs ---

#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod routes;

// Re-export for main backend
pub use handlers::PaymentsState;
pub use routes::routes;
