//! Order, order history, and tracking models.

use super::null_as_default;
use crate::error::not_blank;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One requested line of a new order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[validate(custom(function = "not_blank"))]
    pub product_id: String,
    #[validate(range(min = 1_u32, message = "must be at least 1"))]
    pub quantity: u32,
}

/// Body for `POST /orders`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct CreateOrder {
    #[validate(length(min = 1_u64), nested)]
    pub items: Vec<OrderLine>,
}

impl CreateOrder {
    pub fn new(items: Vec<OrderLine>) -> Self {
        Self { items }
    }
}

/// Response of `POST /orders`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrderReceipt {
    pub id: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(alias = "_id")]
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub quantity: u32,
    pub price: f64,
}

/// An order as listed by `GET /orders/history`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "_id")]
    pub id: String,
    pub user_id: String,
    pub status: String,
    pub total_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<OrderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StatusChange {
    pub status: String,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub note: String,
}

/// Response of `GET /orders/tracking`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderTracking {
    pub order_id: String,
    pub user_id: String,
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub history: Vec<StatusChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl OrderTracking {
    /// Most recent history entry by timestamp; entries without a
    /// timestamp sort first.
    pub fn latest(&self) -> Option<&StatusChange> {
        self.history.iter().max_by_key(|change| change.timestamp)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{CheckPayload, ValidationError};

    #[test]
    fn test_create_order_validation() {
        assert_eq!(CreateOrder::default().check(), Err(ValidationError::required("items")));

        let zero = CreateOrder::new(vec![OrderLine { product_id: "p1".to_string(), quantity: 0 }]);
        assert_eq!(zero.check(), Err(ValidationError::invalid("quantity", "must be at least 1")));

        let blank = CreateOrder::new(vec![OrderLine { product_id: " ".to_string(), quantity: 1 }]);
        assert_eq!(blank.check(), Err(ValidationError::required("productId")));

        let ok = CreateOrder::new(vec![OrderLine { product_id: "p1".to_string(), quantity: 2 }]);
        assert!(ok.check().is_ok());
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({"items": [{"productId": "p1", "quantity": 2}]})
        );
    }

    #[test]
    fn test_tracking_latest() {
        let json = r#"{"orderId":"o1","status":"shipped","history":[
            {"status":"created","timestamp":"2024-05-01T08:00:00Z"},
            {"status":"shipped","timestamp":"2024-05-02T08:00:00Z","note":"courier"},
            {"status":"paid","timestamp":"2024-05-01T09:00:00Z"}
        ]}"#;
        let tracking: OrderTracking = serde_json::from_str(json).unwrap();

        let latest = tracking.latest().unwrap();
        assert_eq!(latest.status, "shipped");
        assert_eq!(latest.note, "courier");
    }

    #[test]
    fn test_null_lists_decode_empty() {
        let tracking: OrderTracking =
            serde_json::from_str(r#"{"orderId":"o1","status":"created","history":null}"#).unwrap();
        assert!(tracking.history.is_empty());
        assert!(tracking.latest().is_none());

        let order: Order = serde_json::from_str(r#"{"id":"o1","items":null,"totalPrice":0}"#).unwrap();
        assert!(order.items.is_empty());
    }
}
