#![doc = include_str!("../README.md")]

mod api;
mod auth;
mod badges;
mod config;
mod error;
pub mod filter;
mod http;
mod session;

pub use api::{best_barcode_match, Api};
pub use auth::{AuthStore, TOKEN_MISSING};
pub use badges::{refresh_badges, Badges, GUEST_LABEL, USER_LABEL};
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::{HttpClient, Method, RequestOptions};
pub use session::{FileTokenStore, MemoryTokenStore, Session, SessionState, TokenStore, TOKEN_SLOT};
