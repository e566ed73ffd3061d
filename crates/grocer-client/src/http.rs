//! Generic request wrapper: base URL, bearer injection, payload parsing,
//! and error normalization.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::session::Session;
use grocer_types::Ack;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
        }
    }
}

/// Per-request options. Defaults to an authenticated `GET` without a body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    /// Attach the session token when one is present
    pub requires_auth: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self { method: Method::Get, body: None, requires_auth: true }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self { method, ..Default::default() }
    }

    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    /// JSON-encodes `body` into the request.
    pub fn with_body<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ClientError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ClientError::Validation(format!("Failed to serialize body: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Sends the request without the bearer token.
    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }
}

/// Stateless HTTP client over a configured base URL.
///
/// The only state read at call time is the session token.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: ClientConfig,
    session: Session,
}

impl HttpClient {
    pub fn new(config: ClientConfig, session: Session) -> Result<Self, ClientError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
        let client = builder.build()?;
        Ok(Self { client, config, session })
    }

    /// Sends `options.method` to `base_url + path` and returns the parsed
    /// payload.
    ///
    /// Success bodies that are not JSON come back as a JSON string; an
    /// empty body is `null`. Non-2xx statuses become
    /// [`ClientError::Status`].
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value, ClientError> {
        let url = self.config.url_for(path);
        let mut builder = self
            .client
            .request(options.method.into(), &url)
            .header(CONTENT_TYPE, "application/json");

        if options.requires_auth {
            if let Some(token) = self.session.current_token() {
                builder = builder.bearer_auth(token);
            }
        }
        if let Some(body) = &options.body {
            builder = builder.body(body.to_string());
        }

        tracing::debug!(method = ?options.method, %url, "sending request");
        let resp = builder.send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        let payload = parse_payload(&text);

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), %url, "request failed");
            return Err(ClientError::from_status(status.as_u16(), payload));
        }
        Ok(payload)
    }

    /// [`request`](Self::request) followed by a typed decode.
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let payload = self.request(path, options).await?;
        decode(payload)
    }

    /// Decodes a listing; anything that is not a JSON array (including
    /// `null` for an empty server-side slice) is an empty list.
    pub async fn request_list<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Vec<T>, ClientError> {
        match self.request(path, options).await? {
            payload @ Value::Array(_) => decode(payload),
            _ => Ok(Vec::new()),
        }
    }

    /// For mutations whose body is only informational.
    pub async fn request_ack(&self, path: &str, options: RequestOptions) -> Result<Ack, ClientError> {
        let payload = self.request(path, options).await?;
        Ok(serde_json::from_value(payload).unwrap_or_default())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, ClientError> {
    serde_json::from_value(payload).map_err(|e| ClientError::Decode(e.to_string()))
}

pub(crate) fn parse_payload(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_payload() {
        assert_eq!(parse_payload(""), Value::Null);
        assert_eq!(parse_payload(r#"{"a":1}"#), json!({"a": 1}));
        assert_eq!(parse_payload("staff ok"), json!("staff ok"));
        assert_eq!(parse_payload("{broken"), json!("{broken"));
    }

    #[test]
    fn test_request_options_defaults() {
        let options = RequestOptions::default();
        assert_eq!(options.method, Method::Get);
        assert!(options.requires_auth);
        assert!(options.body.is_none());

        let options = RequestOptions::new(Method::Post)
            .with_body(&json!({"email": "a@b.c"}))
            .map(RequestOptions::public)
            .expect("serializable");
        assert!(!options.requires_auth);
        assert_eq!(options.body, Some(json!({"email": "a@b.c"})));
    }
}
