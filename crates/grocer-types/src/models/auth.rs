//! Authentication payloads.

use crate::error::not_blank;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct Credentials {
    #[validate(custom(function = "not_blank"))]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

/// Body for `POST /auth/register`.
///
/// `role` and `staffCode` are sent empty for customer sign-ups; the server
/// decides whether a staff code grants the staff role.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[validate(custom(function = "not_blank"))]
    pub full_name: String,
    #[validate(custom(function = "not_blank"))]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub password: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub staff_code: String,
}

/// Response of the login and register endpoints.
///
/// Login always carries a token; register may only return the new user id,
/// in which case the caller has to log in separately.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: Option<String>,
    pub access_token: Option<String>,
    pub user_id: Option<String>,
    pub role: Option<String>,
    /// New user id returned by register
    pub id: Option<String>,
}

impl AuthResponse {
    /// Bearer token, checking `token` first and `accessToken` second.
    /// Empty strings count as absent.
    pub fn bearer(&self) -> Option<&str> {
        [&self.token, &self.access_token]
            .into_iter()
            .filter_map(|t| t.as_deref())
            .find(|t| !t.is_empty())
    }
}

/// Generic acknowledgement returned by mutating endpoints
/// (`{"message": ...}` and/or `{"id": ...}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Ack {
    pub message: Option<String>,
    pub id: Option<String>,
}
