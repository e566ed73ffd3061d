//! Wishlist models.

use super::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WishlistItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub in_stock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Wishlist {
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<WishlistItem>,
    pub total_items: u32,
}

/// Response of `GET /wishlist/check`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct WishlistCheck {
    pub in_wishlist: bool,
}

/// Body for `POST /wishlist`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    pub product_id: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_wishlist_with_null_items() {
        let wishlist: Wishlist = serde_json::from_str(r#"{"items":null,"totalItems":0}"#).unwrap();
        assert!(wishlist.items.is_empty());
        assert_eq!(wishlist.total_items, 0);
    }
}
