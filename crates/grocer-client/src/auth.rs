//! Login, registration and logout on top of [`Session`].

use crate::api::Api;
use crate::error::ClientError;
use crate::session::{Session, SessionState};
use grocer_types::{CheckPayload, Credentials, Registration};

/// Message used when a login response carries no bearer token.
pub const TOKEN_MISSING: &str = "Token not found in response";

/// Auth transitions. Every successful transition writes the token slot;
/// a failed one leaves the session untouched.
#[derive(Clone)]
pub struct AuthStore {
    api: Api,
}

impl AuthStore {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub fn session(&self) -> &Session {
        self.api.session()
    }

    pub fn state(&self) -> SessionState {
        self.session().state()
    }

    /// Authenticates and stores the returned token.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ClientError> {
        credentials.check()?;
        let resp = self.api.login(credentials).await?;
        let token = resp
            .bearer()
            .map(str::to_string)
            .ok_or_else(|| ClientError::Validation(TOKEN_MISSING.to_string()))?;
        self.session().set_token(Some(&token));
        Ok(token)
    }

    /// Creates an account. Returns the token when the server issued one;
    /// `None` means the caller still has to log in.
    pub async fn register(&self, registration: &Registration) -> Result<Option<String>, ClientError> {
        registration.check()?;
        let resp = self.api.register(registration).await?;
        match resp.bearer() {
            Some(token) => {
                self.session().set_token(Some(token));
                Ok(Some(token.to_string()))
            },
            None => {
                tracing::info!(user_id = ?resp.id, "registered without a token, login required");
                Ok(None)
            },
        }
    }

    pub fn logout(&self) {
        self.session().set_token(None);
    }

    /// Re-reads the token slot after another context changed it.
    pub fn on_external_change(&self) -> bool {
        self.session().on_external_change()
    }
}
