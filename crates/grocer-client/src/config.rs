//! Client configuration.

/// Env var holding the API base URL.
pub const BASE_URL_ENV: &str = "GROCER_API_BASE_URL";
/// Env var holding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "GROCER_API_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every request path is appended to; never ends with `/`
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: trim_base(base_url.into()), timeout_secs: DEFAULT_TIMEOUT_SECS }
    }

    /// Reads [`BASE_URL_ENV`] and [`TIMEOUT_ENV`], keeping defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = trim_base(url);
            }
        }
        if let Some(secs) = std::env::var(TIMEOUT_ENV).ok().and_then(|s| s.trim().parse().ok()) {
            config.timeout_secs = secs;
        }
        config
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// `base_url + path`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn trim_base(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("http://api.local:9000/ ");
        assert_eq!(config.url_for("/products"), "http://api.local:9000/products");
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 30);
    }
}
