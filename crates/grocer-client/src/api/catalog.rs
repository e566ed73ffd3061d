use super::{segment, with_param, Api};
use crate::error::ClientError;
use crate::filter::FilterQuery;
use crate::http::RequestOptions;
use grocer_types::{Brand, Category, Product};

impl Api {
    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.http.request_list("/categories", RequestOptions::get().public()).await
    }

    pub async fn list_brands(&self) -> Result<Vec<Brand>, ClientError> {
        self.http.request_list("/brands", RequestOptions::get().public()).await
    }

    /// `GET /products`, with `q` and `categoryId` only when non-empty.
    pub async fn list_products(&self, query: &FilterQuery) -> Result<Vec<Product>, ClientError> {
        let qs = query.normalized().to_query_string();
        let path = if qs.is_empty() { "/products".to_string() } else { format!("/products?{}", qs) };
        self.http.request_list(&path, RequestOptions::get().public()).await
    }

    pub async fn product_by_id(&self, id: &str) -> Result<Product, ClientError> {
        let path = format!("/products/{}", segment(id));
        self.http.request_as(&path, RequestOptions::get().public()).await
    }

    pub async fn product_by_barcode(&self, code: &str) -> Result<Product, ClientError> {
        let path = with_param("/products/barcode", "code", code);
        self.http.request_as(&path, RequestOptions::get().public()).await
    }

    /// Resolves a scanned or typed barcode.
    ///
    /// Tries the barcode endpoint first; on any failure falls back to a
    /// text search for the code and picks the best match. A blank code
    /// resolves to `None` without a request.
    pub async fn lookup_barcode(&self, code: &str) -> Result<Option<Product>, ClientError> {
        let code = code.trim();
        if code.is_empty() {
            return Ok(None);
        }
        match self.product_by_barcode(code).await {
            Ok(product) => return Ok(Some(product)),
            Err(e) => tracing::debug!(code, error = %e, "barcode endpoint failed, falling back to search"),
        }
        let products = self.list_products(&FilterQuery::new(code, "")).await?;
        Ok(best_barcode_match(products, code))
    }
}

/// Exact barcode match if any, else the first result.
pub fn best_barcode_match(products: Vec<Product>, code: &str) -> Option<Product> {
    let exact = products.iter().position(|p| p.matches_barcode(code));
    products.into_iter().nth(exact.unwrap_or(0))
}
