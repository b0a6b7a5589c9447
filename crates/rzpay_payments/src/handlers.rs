// --- File: crates/rzpay_payments/src/handlers.rs ---
use axum::{extract::State, http::StatusCode, response::Json};
use rzpay_common::{
    internal_error, validation_error, ApiJson, OrderConfirmation, OrderGateway, OrderRequest,
    PaymentRecord, PaymentRecordStore, RzpayError,
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Message returned when a payment record cannot be stored. The store error itself is only logged.
pub const INSERT_FAILED_MESSAGE: &str = "Could not insert payment";

// --- State for Payment Handlers ---
// Both handles are built once at startup and shared by every request
#[derive(Clone)]
pub struct PaymentsState {
    pub gateway: Arc<dyn OrderGateway>,
    pub store: Arc<dyn PaymentRecordStore>,
}

/// Liveness text.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is up", body = String, content_type = "text/plain")),
    tag = "Payments"
))]
pub async fn hello_handler() -> &'static str {
    "Hello, World!"
}

/// Axum handler to create a Razorpay order.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/order",
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order created; gateway response passed through", body = serde_json::Value),
        (status = 400, description = "Body is not valid JSON or amount is not positive"),
        (status = 502, description = "Payment gateway error"),
        (status = 504, description = "Payment gateway timeout")
    ),
    tag = "Payments"
))]
pub async fn create_order_handler(
    State(state): State<Arc<PaymentsState>>,
    ApiJson(payload): ApiJson<OrderRequest>,
) -> Result<Json<OrderConfirmation>, RzpayError> {
    if payload.amount <= 0 {
        warn!("Rejecting order with non-positive amount {}", payload.amount);
        return Err(validation_error("amount must be a positive integer"));
    }

    match state.gateway.create_order(payload.amount).await {
        Ok(order) => Ok(Json(order)),
        Err(e) => {
            error!("Order creation for amount {} failed: {}", payload.amount, e);
            Err(e)
        }
    }
}

/// Axum handler listing every stored payment record.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/payment",
    responses(
        (status = 200, description = "All payment records, possibly empty", body = [PaymentRecord]),
        (status = 500, description = "Store failure")
    ),
    tag = "Payments"
))]
pub async fn list_payments_handler(
    State(state): State<Arc<PaymentsState>>,
) -> Result<Json<Vec<PaymentRecord>>, RzpayError> {
    let records = state.store.find_all().await.map_err(|e| {
        error!("Listing payment records failed: {}", e);
        e
    })?;
    Ok(Json(records))
}

/// Axum handler storing a payment confirmation.
///
/// Responds with the record as submitted; the id the store assigned is logged, not echoed.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/payment",
    request_body = PaymentRecord,
    responses(
        (status = 201, description = "Record stored", body = PaymentRecord),
        (status = 400, description = "Body is not valid JSON"),
        (status = 500, description = "Store failure")
    ),
    tag = "Payments"
))]
pub async fn create_payment_handler(
    State(state): State<Arc<PaymentsState>>,
    ApiJson(record): ApiJson<PaymentRecord>,
) -> Result<(StatusCode, Json<PaymentRecord>), RzpayError> {
    match state.store.insert(record.clone()).await {
        Ok(id) => {
            info!(
                "Stored payment record {} for order {}",
                id, record.order_id
            );
            Ok((StatusCode::CREATED, Json(record)))
        }
        Err(e) => {
            error!("Storing payment record failed: {}", e);
            Err(internal_error(INSERT_FAILED_MESSAGE))
        }
    }
}
