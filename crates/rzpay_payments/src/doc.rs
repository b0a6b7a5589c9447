// --- File: crates/rzpay_payments/src/doc.rs ---
use rzpay_common::{OrderRequest, PaymentRecord};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::hello_handler,
        crate::handlers::create_order_handler,
        crate::handlers::list_payments_handler,
        crate::handlers::create_payment_handler,
    ),
    components(schemas(OrderRequest, PaymentRecord)),
    tags(
        (name = "Payments", description = "Razorpay orders and payment confirmation records")
    )
)]
pub struct PaymentsApiDoc;
