// --- File: crates/rzpay_razorpay/src/lib.rs ---

pub mod error;
pub mod logic;
pub mod service;

pub use error::RazorpayError;
pub use logic::{create_order, CreateOrderPayload, ORDER_CURRENCY, ORDER_RECEIPT};
pub use service::RazorpayOrderService;
