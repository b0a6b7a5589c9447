// --- File: crates/services/rzpay_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! Builds the Razorpay gateway and the MongoDB payment-record store once at
//! startup and hands them to the router as trait objects.
use rzpay_common::{OrderGateway, PaymentRecordStore, RzpayError, ServiceFactory};
use rzpay_config::AppConfig;
use rzpay_db::{DbClient, MongoPaymentRecordRepository};
use rzpay_razorpay::RazorpayOrderService;
use std::sync::Arc;
use tracing::{info, warn};

/// Service factory implementation.
pub struct RzpayServiceFactory {
    order_gateway: Arc<dyn OrderGateway>,
    payment_record_store: Arc<dyn PaymentRecordStore>,
}

impl RzpayServiceFactory {
    /// Create the production services from configuration.
    ///
    /// An unreachable database is logged but not fatal; each request reports
    /// its own store failure.
    pub async fn new(config: &AppConfig) -> Result<Self, RzpayError> {
        info!("ℹ️ Initializing Razorpay order service...");
        let order_gateway = RazorpayOrderService::new(config.razorpay.clone())?;
        info!("✅ Razorpay order service ready ({})", config.razorpay.base_url);

        info!("ℹ️ Connecting to MongoDB...");
        let client = DbClient::from_config(&config.database).await?;
        if client.is_healthy().await {
            info!("✅ MongoDB reachable, using {}", client);
        } else {
            warn!(
                "⚠️ MongoDB not reachable at startup; /payment requests fail until it is ({})",
                client
            );
        }
        let payment_record_store = MongoPaymentRecordRepository::new(&client, &config.database);

        Ok(Self::from_services(
            Arc::new(order_gateway),
            Arc::new(payment_record_store),
        ))
    }

    /// Wrap already-built services, e.g. test doubles.
    pub fn from_services(
        order_gateway: Arc<dyn OrderGateway>,
        payment_record_store: Arc<dyn PaymentRecordStore>,
    ) -> Self {
        Self {
            order_gateway,
            payment_record_store,
        }
    }
}

impl ServiceFactory for RzpayServiceFactory {
    fn order_gateway(&self) -> Arc<dyn OrderGateway> {
        self.order_gateway.clone()
    }

    fn payment_record_store(&self) -> Arc<dyn PaymentRecordStore> {
        self.payment_record_store.clone()
    }
}
