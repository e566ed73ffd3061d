use super::{with_param, Api};
use crate::error::ClientError;
use crate::http::{Method, RequestOptions};
use grocer_types::{Ack, Wishlist, WishlistCheck, WishlistEntry};

impl Api {
    pub async fn wishlist(&self) -> Result<Wishlist, ClientError> {
        self.http.request_as("/wishlist", RequestOptions::get()).await
    }

    pub async fn add_to_wishlist(&self, product_id: &str) -> Result<Ack, ClientError> {
        let entry = WishlistEntry { product_id: product_id.to_string() };
        self.http.request_ack("/wishlist", RequestOptions::new(Method::Post).with_body(&entry)?).await
    }

    pub async fn remove_from_wishlist(&self, product_id: &str) -> Result<Ack, ClientError> {
        let path = with_param("/wishlist", "productId", product_id);
        self.http.request_ack(&path, RequestOptions::new(Method::Delete)).await
    }

    pub async fn in_wishlist(&self, product_id: &str) -> Result<bool, ClientError> {
        let path = with_param("/wishlist/check", "productId", product_id);
        let check: WishlistCheck = self.http.request_as(&path, RequestOptions::get()).await?;
        Ok(check.in_wishlist)
    }
}
