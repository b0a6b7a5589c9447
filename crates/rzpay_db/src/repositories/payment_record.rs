//! Stored shape of payment records
//!
//! The payment id is persisted under `empaymentID` while the JSON API calls it
//! `paymentID`. Existing collections were written with that key, so it is
//! kept; renaming it needs a data migration, not a code change.

use mongodb::bson::{oid::ObjectId, Bson};
use serde::{Deserialize, Serialize};

use rzpay_common::models::null_as_empty;
pub use rzpay_common::models::PaymentRecord;

/// Document key holding the gateway payment id.
pub const PAYMENT_ID_KEY: &str = "empaymentID";

// Define a DB-specific wrapper for PaymentRecord with MongoDB field names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecordDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Bson>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(rename = "orderID", default, deserialize_with = "null_as_empty")]
    pub order_id: String,
    #[serde(rename = "empaymentID", default, deserialize_with = "null_as_empty")]
    pub payment_id: String,
}

impl From<PaymentRecord> for PaymentRecordDocument {
    fn from(record: PaymentRecord) -> Self {
        // Only a non-empty client id is written; otherwise the server assigns an ObjectId
        let id = record
            .assigned_id()
            .map(|id| Bson::String(id.to_string()));
        Self {
            id,
            name: record.name,
            email: record.email,
            phone: record.phone,
            order_id: record.order_id,
            payment_id: record.payment_id,
        }
    }
}

impl From<PaymentRecordDocument> for PaymentRecord {
    fn from(doc: PaymentRecordDocument) -> Self {
        Self {
            id: doc.id.as_ref().map(id_to_string),
            name: doc.name,
            email: doc.email,
            phone: doc.phone,
            order_id: doc.order_id,
            payment_id: doc.payment_id,
        }
    }
}

/// Renders a stored `_id` the way clients see it: ObjectIds as 24-char hex.
pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Generates an id the way the server would, for stores that have no server.
pub fn new_object_id() -> Bson {
    Bson::ObjectId(ObjectId::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, to_document};

    fn record() -> PaymentRecord {
        PaymentRecord {
            id: None,
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            phone: "123".to_string(),
            order_id: "o1".to_string(),
            payment_id: "p1".to_string(),
        }
    }

    #[test]
    fn test_document_keys() {
        let stored = to_document(&PaymentRecordDocument::from(record())).unwrap();

        assert_eq!(
            stored,
            doc! {
                "name": "A",
                "email": "a@b.com",
                "phone": "123",
                "orderID": "o1",
                "empaymentID": "p1",
            }
        );
        assert!(!stored.contains_key("_id"));
        assert!(stored.contains_key(PAYMENT_ID_KEY));
        assert!(!stored.contains_key("paymentID"));
    }

    #[test]
    fn test_client_supplied_id_is_kept_as_string() {
        let mut input = record();
        input.id = Some("custom-id".to_string());

        let stored = to_document(&PaymentRecordDocument::from(input)).unwrap();
        assert_eq!(stored.get_str("_id").unwrap(), "custom-id");
    }

    #[test]
    fn test_empty_client_id_is_dropped() {
        let mut input = record();
        input.id = Some(String::new());

        let stored = PaymentRecordDocument::from(input);
        assert_eq!(stored.id, None);
    }

    #[test]
    fn test_object_id_is_rendered_as_hex() {
        let oid = ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let stored = doc! {
            "_id": oid,
            "name": "A",
            "email": "a@b.com",
            "phone": "123",
            "orderID": "o1",
            "empaymentID": "p1",
        };

        let decoded: PaymentRecordDocument = from_document(stored).unwrap();
        let record = PaymentRecord::from(decoded);

        assert_eq!(record.id.as_deref(), Some("65a1f0c2e4b0a1b2c3d4e5f6"));
        assert_eq!(record.payment_id, "p1");
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let decoded: PaymentRecordDocument =
            from_document(doc! { "_id": "x", "name": "only" }).unwrap();
        let record = PaymentRecord::from(decoded);

        assert_eq!(record.id.as_deref(), Some("x"));
        assert_eq!(record.name, "only");
        assert_eq!(record.order_id, "");
        assert_eq!(record.payment_id, "");
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let decoded: PaymentRecordDocument = from_document(doc! {
            "_id": ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap(),
            "name": "A",
            "email": Bson::Null,
            "phone": Bson::Null,
            "orderID": "o1",
            "empaymentID": Bson::Null,
        })
        .unwrap();
        let record = PaymentRecord::from(decoded);

        assert_eq!(record.name, "A");
        assert_eq!(record.email, "");
        assert_eq!(record.phone, "");
        assert_eq!(record.order_id, "o1");
        assert_eq!(record.payment_id, "");
    }
}
