//! Payment-record repositories
//!
//! `payment_record` holds the stored document shape; the other modules are
//! the store backends.

pub mod payment_record;
#[cfg(any(test, feature = "test-util"))]
pub mod payment_record_memory;
pub mod payment_record_mongo;

pub use payment_record::{PaymentRecordDocument, PAYMENT_ID_KEY};
#[cfg(any(test, feature = "test-util"))]
pub use payment_record_memory::InMemoryPaymentRecordRepository;
pub use payment_record_mongo::MongoPaymentRecordRepository;
