//! MongoDB implementation of the payment-record store

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;
use rzpay_common::{BoxFuture, PaymentRecordStore, RzpayError};
use rzpay_config::DatabaseConfig;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error};

use super::payment_record::{id_to_string, PaymentRecord, PaymentRecordDocument};
use crate::client::DbClient;
use crate::error::DbError;

/// Payment records in one MongoDB collection.
///
/// Every operation runs under its own deadline; nothing is retried.
#[derive(Debug, Clone)]
pub struct MongoPaymentRecordRepository {
    collection: Collection<PaymentRecordDocument>,
    insert_timeout: Duration,
    find_timeout: Duration,
}

impl MongoPaymentRecordRepository {
    /// Create a new repository over the configured collection
    pub fn new(client: &DbClient, config: &DatabaseConfig) -> Self {
        Self {
            collection: client.collection(&config.collection),
            insert_timeout: Duration::from_secs(config.insert_timeout_secs),
            find_timeout: Duration::from_secs(config.find_timeout_secs),
        }
    }

    /// Insert one record, returning the `_id` the server stored.
    pub async fn insert_record(&self, record: PaymentRecord) -> Result<String, DbError> {
        let document = PaymentRecordDocument::from(record);
        let result = with_deadline("insert", self.insert_timeout, async {
            self.collection.insert_one(document).await
        })
        .await?;

        let id = id_to_string(&result.inserted_id);
        debug!("Inserted payment record {}", id);
        Ok(id)
    }

    /// Read the whole collection.
    ///
    /// One undecodable document fails the call; partial results are never returned.
    pub async fn find_all_records(&self) -> Result<Vec<PaymentRecord>, DbError> {
        let documents: Vec<PaymentRecordDocument> =
            with_deadline("find", self.find_timeout, async {
                let cursor = self.collection.find(doc! {}).await?;
                cursor.try_collect::<Vec<_>>().await
            })
            .await?;

        debug!("Loaded {} payment records", documents.len());
        Ok(documents.into_iter().map(PaymentRecord::from).collect())
    }
}

async fn with_deadline<T, F>(
    operation: &'static str,
    deadline: Duration,
    fut: F,
) -> Result<T, DbError>
where
    F: Future<Output = Result<T, mongodb::error::Error>>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            error!("MongoDB {} failed: {}", operation, e);
            Err(DbError::MongoError(e))
        }
        Err(_) => {
            error!(
                "MongoDB {} timed out after {}s",
                operation,
                deadline.as_secs()
            );
            Err(DbError::Timeout {
                operation,
                secs: deadline.as_secs(),
            })
        }
    }
}

impl PaymentRecordStore for MongoPaymentRecordRepository {
    fn insert(&self, record: PaymentRecord) -> BoxFuture<'_, String, RzpayError> {
        Box::pin(async move { Ok(self.insert_record(record).await?) })
    }

    fn find_all(&self) -> BoxFuture<'_, Vec<PaymentRecord>, RzpayError> {
        Box::pin(async move { Ok(self.find_all_records().await?) })
    }
}
