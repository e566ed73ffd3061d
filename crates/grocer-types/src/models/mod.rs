//! Resource models for the storefront API.
//!
//! Field names follow the server's camelCase JSON.

mod auth;
mod cart;
mod catalog;
mod order;
mod product;
mod profile;
mod wishlist;

/// Decodes `null` as the field's default. The server sends `null` for
/// empty lists.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

pub use auth::{Ack, AuthResponse, Credentials, Registration};
pub use cart::{Cart, CartItem, CartLine};
pub use catalog::{Brand, Category, NameDraft};
pub use order::{CreateOrder, Order, OrderItem, OrderLine, OrderReceipt, OrderTracking, StatusChange};
pub use product::{normalize_image_url, Product, ProductDraft, ProductLocation};
pub use profile::Profile;
pub use wishlist::{Wishlist, WishlistCheck, WishlistEntry, WishlistItem};
