//! Back-office endpoints. The server rejects non-staff tokens with 403.

use super::{with_param, Api};
use crate::error::ClientError;
use crate::http::{Method, RequestOptions};
use grocer_types::{Ack, CheckPayload, NameDraft, ProductDraft};
use serde_json::Value;

impl Api {
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Ack, ClientError> {
        draft.check()?;
        let options = RequestOptions::new(Method::Post).with_body(draft)?;
        self.http.request_ack("/staff/products", options).await
    }

    pub async fn update_product(&self, id: &str, draft: &ProductDraft) -> Result<Ack, ClientError> {
        draft.check()?;
        let path = with_param("/staff/products/update", "id", id);
        self.http.request_ack(&path, RequestOptions::new(Method::Patch).with_body(draft)?).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<Ack, ClientError> {
        let path = with_param("/staff/products/delete", "id", id);
        self.http.request_ack(&path, RequestOptions::new(Method::Delete)).await
    }

    pub async fn create_category(&self, name: &str) -> Result<Ack, ClientError> {
        self.create_named("/staff/categories", name).await
    }

    pub async fn rename_category(&self, id: &str, name: &str) -> Result<Ack, ClientError> {
        self.rename_named("/staff/categories", id, name).await
    }

    pub async fn delete_category(&self, id: &str) -> Result<Ack, ClientError> {
        let path = with_param("/staff/categories", "id", id);
        self.http.request_ack(&path, RequestOptions::new(Method::Delete)).await
    }

    pub async fn create_brand(&self, name: &str) -> Result<Ack, ClientError> {
        self.create_named("/staff/brands", name).await
    }

    pub async fn rename_brand(&self, id: &str, name: &str) -> Result<Ack, ClientError> {
        self.rename_named("/staff/brands", id, name).await
    }

    pub async fn delete_brand(&self, id: &str) -> Result<Ack, ClientError> {
        let path = with_param("/staff/brands", "id", id);
        self.http.request_ack(&path, RequestOptions::new(Method::Delete)).await
    }

    /// `GET /staff/ping`; answers `"staff ok"` in plain text for staff tokens.
    pub async fn staff_ping(&self) -> Result<String, ClientError> {
        match self.http.request("/staff/ping", RequestOptions::get()).await? {
            Value::String(text) => Ok(text),
            other => Ok(other.to_string()),
        }
    }

    async fn create_named(&self, collection: &str, name: &str) -> Result<Ack, ClientError> {
        let draft = NameDraft::new(name);
        draft.check()?;
        self.http.request_ack(collection, RequestOptions::new(Method::Post).with_body(&draft)?).await
    }

    async fn rename_named(&self, collection: &str, id: &str, name: &str) -> Result<Ack, ClientError> {
        let draft = NameDraft::new(name);
        draft.check()?;
        let path = with_param(collection, "id", id);
        self.http.request_ack(&path, RequestOptions::new(Method::Patch).with_body(&draft)?).await
    }
}
