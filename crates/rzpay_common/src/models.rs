// --- File: crates/rzpay_common/src/models.rs ---

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OrderRequest {
    /// Amount in major currency units (rupees). Converted to paise before it reaches the gateway.
    #[cfg_attr(feature = "openapi", schema(example = 500))]
    pub amount: i64,
}

/// A payment confirmation as submitted by the client after checkout.
///
/// Contact fields are free text and are stored exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaymentRecord {
    /// Store-assigned identifier. Absent on input unless the client picks one.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[cfg_attr(feature = "openapi", schema(example = "A"))]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[cfg_attr(feature = "openapi", schema(example = "a@b.com"))]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[cfg_attr(feature = "openapi", schema(example = "123"))]
    pub phone: String,

    /// Razorpay order id (`order_...`).
    #[serde(rename = "orderID", default, deserialize_with = "null_as_empty")]
    #[cfg_attr(feature = "openapi", schema(example = "o1"))]
    pub order_id: String,

    /// Razorpay payment id (`pay_...`).
    #[serde(rename = "paymentID", default, deserialize_with = "null_as_empty")]
    #[cfg_attr(feature = "openapi", schema(example = "p1"))]
    pub payment_id: String,
}

impl PaymentRecord {
    /// The identifier if one is set and non-empty.
    pub fn assigned_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Reads a string field, treating an explicit `null` like a missing key.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn is_blank(id: &Option<String>) -> bool {
    id.as_deref().map_or(true, str::is_empty)
}
