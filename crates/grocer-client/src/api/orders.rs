use super::{with_param, Api};
use crate::error::ClientError;
use crate::http::{Method, RequestOptions};
use grocer_types::{CheckPayload, CreateOrder, Order, OrderReceipt, OrderTracking};

impl Api {
    /// Rejects an empty or malformed order before sending it.
    pub async fn create_order(&self, order: &CreateOrder) -> Result<OrderReceipt, ClientError> {
        order.check()?;
        let options = RequestOptions::new(Method::Post).with_body(order)?;
        self.http.request_as("/orders", options).await
    }

    pub async fn track_order(&self, order_id: &str) -> Result<OrderTracking, ClientError> {
        let order_id = order_id.trim();
        if order_id.is_empty() {
            return Err(ClientError::Validation("Order id is required".to_string()));
        }
        let path = with_param("/orders/tracking", "id", order_id);
        self.http.request_as(&path, RequestOptions::get()).await
    }

    pub async fn order_history(&self) -> Result<Vec<Order>, ClientError> {
        self.http.request_list("/orders/history", RequestOptions::get()).await
    }
}
