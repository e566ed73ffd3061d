use super::Api;
use crate::error::ClientError;
use crate::http::{Method, RequestOptions};
use grocer_types::{AuthResponse, Credentials, Registration};

impl Api {
    /// `POST /auth/login`. Sent without a bearer token.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ClientError> {
        let options = RequestOptions::new(Method::Post).with_body(credentials)?.public();
        self.http.request_as("/auth/login", options).await
    }

    /// `POST /auth/register`. The response may not carry a token.
    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, ClientError> {
        let options = RequestOptions::new(Method::Post).with_body(registration)?.public();
        self.http.request_as("/auth/register", options).await
    }
}
