//! Cart models.

use super::null_as_default;
use serde::{Deserialize, Serialize};

/// A cart line joined with its product snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub quantity: u32,
    pub subtotal: f64,
    pub in_stock: bool,
    pub stock_qty: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Cart {
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<CartItem>,
    pub total_items: u32,
    pub total_price: f64,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines that can be submitted as an order (in stock only).
    pub fn orderable_lines(&self) -> Vec<super::OrderLine> {
        self.items
            .iter()
            .filter(|item| item.in_stock && item.quantity > 0)
            .map(|item| super::OrderLine { product_id: item.product_id.clone(), quantity: item.quantity })
            .collect()
    }
}

/// Body for `POST /cart` and `PATCH /cart`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub quantity: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_orderable_lines_skip_out_of_stock() {
        let json = r#"{"items":[
            {"productId":"p1","quantity":2,"inStock":true},
            {"productId":"p2","quantity":1,"inStock":false}
        ],"totalItems":3,"totalPrice":7.5}"#;
        let cart: Cart = serde_json::from_str(json).unwrap();

        let lines = cart.orderable_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product_id, "p1");
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn test_empty_cart_with_null_items() {
        let cart: Cart = serde_json::from_str(r#"{"items":null,"totalItems":0,"totalPrice":0}"#).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items, 0);
        assert!(cart.orderable_lines().is_empty());

        let cart: Cart = serde_json::from_str("{}").unwrap();
        assert!(cart.is_empty());
    }
}
