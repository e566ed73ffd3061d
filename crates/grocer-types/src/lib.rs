//! # Grocer Types
//!
//! Wire models, request payloads, and validation errors for the Grocer
//! storefront REST API.
//!
//! - **`error`** - Local validation failures raised before any network call
//! - **`models`** - Resource models (Product, Category, Cart, Order, ...)
//!
//! ## Architecture Role
//!
//! `grocer-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!              grocer-types (this crate)
//!                      │
//!                      ▼
//!                grocer-client
//!                      │
//!            ┌─────────┴─────────┐
//!            ▼                   ▼
//!      grocer-leptos         grocer-cli
//! ```
//!
//! Response models are lenient: unknown fields are ignored and missing
//! fields fall back to their defaults, because the server omits empty
//! values freely.

pub mod error;
pub mod models;

pub use error::{CheckPayload, ValidationError};

pub use models::{
    normalize_image_url, Ack, AuthResponse, Brand, Cart, CartItem, CartLine, Category,
    CreateOrder, Credentials, NameDraft, Order, OrderItem, OrderLine, OrderReceipt, OrderTracking,
    Product, ProductDraft, ProductLocation, Profile, Registration, StatusChange, Wishlist,
    WishlistCheck, WishlistEntry, WishlistItem,
};
