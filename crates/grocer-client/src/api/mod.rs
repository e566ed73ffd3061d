//! One typed call per storefront endpoint.

mod auth;
mod cart;
mod catalog;
mod orders;
mod profile;
mod staff;
mod wishlist;

pub use catalog::best_barcode_match;

use crate::http::HttpClient;
use crate::session::Session;
use url::form_urlencoded;

#[derive(Clone)]
pub struct Api {
    http: HttpClient,
}

impl Api {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn session(&self) -> &Session {
        self.http.session()
    }
}

/// `path?key=value` with the value percent-encoded.
fn with_param(path: &str, key: &str, value: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new()).append_pair(key, value).finish();
    format!("{}?{}", path, query)
}

/// Percent-encodes one path segment.
fn segment(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect::<String>().replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_param_encodes_value() {
        assert_eq!(with_param("/orders/tracking", "id", "A 1&2"), "/orders/tracking?id=A+1%262");
    }

    #[test]
    fn test_segment_encodes_spaces_and_slashes() {
        assert_eq!(segment("65b0"), "65b0");
        assert_eq!(segment("a b/c"), "a%20b%2Fc");
    }
}
