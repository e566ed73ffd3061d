//! Product model and staff product payload.

use crate::error::not_blank;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// A product as returned by the catalog endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    /// Object id (hex); some payloads call it `_id`
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub barcode: String,
    pub brand_id: String,
    pub category_id: String,
    /// Denormalized category label, present on some listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    pub price: Option<f64>,
    pub currency: String,
    pub stock_qty: i64,
    pub availability_status: String,
    #[serde(alias = "imageURL", alias = "image")]
    pub image_url: String,
    /// Store location parts, filled in for stores that map their shelves
    pub aisle: String,
    pub section: String,
    pub shelf: String,
    #[serde(alias = "slot")]
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Where a product sits in the physical store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductLocation {
    pub aisle: String,
    pub section: String,
    pub shelf: String,
    pub position: String,
}

impl fmt::Display for ProductLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            ("Aisle", &self.aisle),
            ("Section", &self.section),
            ("Shelf", &self.shelf),
            ("Position", &self.position),
        ];
        let mut first = true;
        for (label, value) in parts {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{label} {value}")?;
            first = false;
        }
        Ok(())
    }
}

impl Product {
    /// Shelf location, or `None` when the store has not mapped this product.
    pub fn location(&self) -> Option<ProductLocation> {
        let parts = [&self.aisle, &self.section, &self.shelf, &self.position];
        if parts.iter().all(|p| p.trim().is_empty()) {
            return None;
        }
        Some(ProductLocation {
            aisle: self.aisle.clone(),
            section: self.section.clone(),
            shelf: self.shelf.clone(),
            position: self.position.clone(),
        })
    }

    pub fn in_stock(&self) -> bool {
        self.stock_qty > 0
    }

    /// Barcode equality after trimming both sides.
    pub fn matches_barcode(&self, code: &str) -> bool {
        self.barcode.trim() == code.trim()
    }
}

/// Resolves an image reference against the page scheme.
///
/// Protocol-relative URLs (`//cdn/...`) get `scheme` prepended; anything
/// else is returned trimmed and unchanged.
pub fn normalize_image_url(raw: &str, scheme: &str) -> String {
    let trimmed = raw.trim();
    if let Some(rest) = trimmed.strip_prefix("//") {
        return format!("{}://{}", scheme.trim_end_matches(':'), rest);
    }
    trimmed.to_string()
}

/// Body for `POST /staff/products` and `PATCH /staff/products/update`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub barcode: String,
    #[serde(default)]
    pub brand_id: String,
    #[serde(default)]
    pub category_id: String,
    #[validate(range(min = 0.0_f64, message = "must be a non-negative number"))]
    pub price: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    #[validate(range(min = 0_i64, message = "must not be negative"))]
    pub stock_qty: i64,
    #[serde(default)]
    pub availability_status: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub aisle: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub shelf: String,
    #[serde(default)]
    pub position: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{CheckPayload, ValidationError};

    #[test]
    fn test_product_accepts_legacy_field_names() {
        let json = r#"{"_id":"65a1","name":"Milk","imageURL":"//cdn/milk.png","slot":"3","price":1.5}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, "65a1");
        assert_eq!(product.image_url, "//cdn/milk.png");
        assert_eq!(product.position, "3");
        assert_eq!(product.price, Some(1.5));
        assert!(product.category_name.is_none());
    }

    #[test]
    fn test_location_absent_when_unmapped() {
        let mut product = Product { aisle: "  ".to_string(), ..Default::default() };
        assert!(product.location().is_none());

        product.shelf = "B".to_string();
        let loc = product.location().unwrap();
        assert_eq!(loc.shelf, "B");
        assert_eq!(loc.to_string(), "Shelf B");

        product.aisle = "4".to_string();
        assert_eq!(product.location().unwrap().to_string(), "Aisle 4, Shelf B");
    }

    #[test]
    fn test_normalize_image_url() {
        assert_eq!(normalize_image_url("//cdn.example/a.png", "https:"), "https://cdn.example/a.png");
        assert_eq!(normalize_image_url(" /static/a.png ", "https:"), "/static/a.png");
        assert_eq!(normalize_image_url("http://x/a.png", "https:"), "http://x/a.png");
        assert_eq!(normalize_image_url("", "https:"), "");
    }

    #[test]
    fn test_draft_validation() {
        let draft = ProductDraft { name: "Bread".to_string(), price: 2.0, ..Default::default() };
        assert!(draft.check().is_ok());

        let nameless = ProductDraft { price: 2.0, ..Default::default() };
        assert_eq!(nameless.check(), Err(ValidationError::required("name")));

        let negative = ProductDraft { name: "Bread".to_string(), price: -1.0, ..Default::default() };
        assert_eq!(negative.check(), Err(ValidationError::invalid("price", "must be a non-negative number")));

        let oversold = ProductDraft { stock_qty: -3, ..draft };
        assert_eq!(oversold.check(), Err(ValidationError::invalid("stockQty", "must not be negative")));
    }
}
