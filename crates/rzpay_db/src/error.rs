//! Error types for the payment-record store

use rzpay_common::{store_error, RzpayError};
use thiserror::Error;

/// Errors that can occur when working with the store
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from the MongoDB driver
    #[error("Database error: {0}")]
    MongoError(#[from] mongodb::error::Error),

    /// Error with the database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// The operation did not finish within its time budget
    #[error("Database {operation} timed out after {secs}s")]
    Timeout { operation: &'static str, secs: u64 },
}

impl From<DbError> for RzpayError {
    fn from(err: DbError) -> Self {
        store_error(err)
    }
}
