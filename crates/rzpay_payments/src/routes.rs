// --- File: crates/rzpay_payments/src/routes.rs ---

use crate::handlers::{
    create_order_handler, create_payment_handler, hello_handler, list_payments_handler,
    PaymentsState,
};
use axum::{
    routing::{get, post},
    Router,
};
use rzpay_common::{OrderGateway, PaymentRecordStore};
use std::sync::Arc;

/// Creates a router containing the order and payment-record routes.
///
/// # Arguments
/// * `gateway` - Order gateway used by `POST /order`.
/// * `store` - Payment-record store used by `/payment`.
pub fn routes(gateway: Arc<dyn OrderGateway>, store: Arc<dyn PaymentRecordStore>) -> Router {
    let payments_state = Arc::new(PaymentsState { gateway, store });

    Router::new()
        .route("/", get(hello_handler))
        .route("/order", post(create_order_handler))
        .route(
            "/payment",
            get(list_payments_handler).post(create_payment_handler),
        )
        .with_state(payments_state)
}
