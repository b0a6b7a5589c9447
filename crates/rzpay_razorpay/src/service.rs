use reqwest::Client;
use rzpay_common::{create_client, BoxFuture, OrderConfirmation, OrderGateway, RzpayError};
use rzpay_config::RazorpayConfig;

use crate::error::RazorpayError;
use crate::logic::create_order;

/// Razorpay-backed [`OrderGateway`].
///
/// Holds one pooled HTTP client for the lifetime of the process.
pub struct RazorpayOrderService {
    config: RazorpayConfig,
    client: Client,
}

impl RazorpayOrderService {
    /// Create a new Razorpay order service with a client bounded by `config.timeout_secs`.
    pub fn new(config: RazorpayConfig) -> Result<Self, RazorpayError> {
        let client = create_client(config.timeout_secs)?;
        Ok(Self { config, client })
    }
}

impl OrderGateway for RazorpayOrderService {
    fn create_order(&self, amount: i64) -> BoxFuture<'_, OrderConfirmation, RzpayError> {
        Box::pin(async move {
            let order = create_order(&self.client, &self.config, amount).await?;
            Ok(order)
        })
    }
}
