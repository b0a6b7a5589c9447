//! In-process payment-record store for tests
//!
//! Behaves like the MongoDB store from the caller's point of view (ids are
//! assigned on insert, listing returns everything in insertion order) but
//! keeps records in a `Vec`. Only compiled for tests and the `test-util` feature.

use rzpay_common::{BoxFuture, PaymentRecordStore, RzpayError};
use tokio::sync::RwLock;

use super::payment_record::{id_to_string, new_object_id, PaymentRecord};

/// Payment records held in memory.
#[derive(Debug, Default)]
pub struct InMemoryPaymentRecordRepository {
    records: RwLock<Vec<PaymentRecord>>,
}

impl InMemoryPaymentRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl PaymentRecordStore for InMemoryPaymentRecordRepository {
    fn insert(&self, mut record: PaymentRecord) -> BoxFuture<'_, String, RzpayError> {
        Box::pin(async move {
            let id = match record.assigned_id() {
                Some(id) => id.to_string(),
                None => id_to_string(&new_object_id()),
            };
            record.id = Some(id.clone());
            self.records.write().await.push(record);
            Ok(id)
        })
    }

    fn find_all(&self) -> BoxFuture<'_, Vec<PaymentRecord>, RzpayError> {
        Box::pin(async move { Ok(self.records.read().await.clone()) })
    }
}
