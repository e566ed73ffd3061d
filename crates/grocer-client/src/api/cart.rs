use super::{with_param, Api};
use crate::error::ClientError;
use crate::http::{Method, RequestOptions};
use grocer_types::{Ack, Cart, CartLine};

impl Api {
    pub async fn cart(&self) -> Result<Cart, ClientError> {
        self.http.request_as("/cart", RequestOptions::get()).await
    }

    pub async fn add_to_cart(&self, product_id: &str, quantity: u32) -> Result<Ack, ClientError> {
        let line = CartLine { product_id: product_id.to_string(), quantity };
        self.http.request_ack("/cart", RequestOptions::new(Method::Post).with_body(&line)?).await
    }

    pub async fn update_cart_item(&self, product_id: &str, quantity: u32) -> Result<Ack, ClientError> {
        let line = CartLine { product_id: product_id.to_string(), quantity };
        self.http.request_ack("/cart", RequestOptions::new(Method::Patch).with_body(&line)?).await
    }

    pub async fn remove_from_cart(&self, product_id: &str) -> Result<Ack, ClientError> {
        let path = with_param("/cart", "productId", product_id);
        self.http.request_ack(&path, RequestOptions::new(Method::Delete)).await
    }

    /// `DELETE /cart` without a product id empties the cart.
    pub async fn clear_cart(&self) -> Result<Ack, ClientError> {
        self.http.request_ack("/cart", RequestOptions::new(Method::Delete)).await
    }
}
