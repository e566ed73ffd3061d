//! Reusable UI components

mod button;
mod header;
mod product_card;
mod toast;

pub use button::{Button, ButtonVariant};
pub use header::Header;
pub use product_card::ProductCard;
pub use toast::ToastHost;
