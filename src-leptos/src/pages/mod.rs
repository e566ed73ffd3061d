//! Page components

mod barcode;
mod cart;
mod catalog;
mod login;
mod track;

pub use barcode::Barcode;
pub use cart::Cart;
pub use catalog::Catalog;
pub use login::Login;
pub use track::TrackOrder;
