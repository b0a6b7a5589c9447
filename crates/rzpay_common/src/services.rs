// --- File: crates/rzpay_common/src/services.rs ---
//! Service abstractions for the two external systems.
//!
//! Handlers only see these traits, so the Razorpay client and the MongoDB
//! collection can be swapped for in-process doubles in tests.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::RzpayError;
use crate::models::PaymentRecord;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// The gateway's order object, passed back to the client untouched.
pub type OrderConfirmation = serde_json::Value;

/// Creates orders on the payment gateway.
pub trait OrderGateway: Send + Sync {
    /// Create an order for `amount` major currency units.
    ///
    /// Not idempotent: every call creates a new remote order.
    fn create_order(&self, amount: i64) -> BoxFuture<'_, OrderConfirmation, RzpayError>;
}

/// Persists and lists payment records.
pub trait PaymentRecordStore: Send + Sync {
    /// Insert one record and return the identifier the store assigned to it.
    fn insert(&self, record: PaymentRecord) -> BoxFuture<'_, String, RzpayError>;

    /// Load every record in the store.
    ///
    /// The whole collection is read into memory on each call. Paging, when it
    /// is needed, belongs behind this method so handlers stay unchanged.
    fn find_all(&self) -> BoxFuture<'_, Vec<PaymentRecord>, RzpayError>;
}

/// A factory for the service instances handed to the HTTP layer.
pub trait ServiceFactory: Send + Sync {
    /// Get the order gateway.
    fn order_gateway(&self) -> Arc<dyn OrderGateway>;

    /// Get the payment-record store.
    fn payment_record_store(&self) -> Arc<dyn PaymentRecordStore>;
}
