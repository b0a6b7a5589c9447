//! Payment-record storage for rzpay
//!
//! This crate owns everything that touches MongoDB: the pooled client, the
//! stored document shape and the repository that implements
//! [`rzpay_common::PaymentRecordStore`].
//!
//! # Example
//!
//! ```rust,no_run
//! use rzpay_config::load_config;
//! use rzpay_db::{DbClient, MongoPaymentRecordRepository};
//!
//! async fn setup_store() -> Result<MongoPaymentRecordRepository, Box<dyn std::error::Error>> {
//!     let config = load_config()?;
//!     let client = DbClient::from_config(&config.database).await?;
//!     Ok(MongoPaymentRecordRepository::new(&client, &config.database))
//! }
//! ```

pub mod client;
pub mod error;
pub mod repositories;

pub use client::DbClient;
pub use error::DbError;
#[cfg(any(test, feature = "test-util"))]
pub use repositories::InMemoryPaymentRecordRepository;
pub use repositories::{MongoPaymentRecordRepository, PaymentRecordDocument, PAYMENT_ID_KEY};
