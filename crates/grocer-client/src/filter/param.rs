//! One query parameter bound to one input (`topic`, `barcode`,
//! `orderId`, `page`).

use super::query::{get_param, set_params, strip_query_prefix};

/// Keeps a single query parameter and its widget in sync.
///
/// Same contract as the catalog filter at a smaller scale: the first
/// observed URL hydrates the widget, the binding's own writes echo back as
/// no-ops, and commits only produce a query string when it would change.
#[derive(Debug, Clone)]
pub struct ParamBinding {
    key: &'static str,
    initialized: bool,
    last_written: String,
    current_url: String,
}

impl ParamBinding {
    pub fn new(key: &'static str) -> Self {
        Self { key, initialized: false, last_written: String::new(), current_url: String::new() }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Value to load into the widget, or `None` when this is the echo of
    /// the binding's own write.
    pub fn observe_url(&mut self, query: &str) -> Option<String> {
        let query = strip_query_prefix(query);
        self.current_url = query.to_string();
        if self.initialized && query == self.last_written {
            return None;
        }
        self.initialized = true;
        self.last_written = query.to_string();
        Some(get_param(query, self.key).unwrap_or_default())
    }

    /// Query string to navigate to for `value`, or `None` when the URL
    /// already says so (or has not been observed yet).
    pub fn commit(&mut self, value: &str) -> Option<String> {
        if !self.initialized {
            return None;
        }
        let next = set_params(&self.current_url, &[(self.key, value)]);
        if next == self.current_url {
            return None;
        }
        self.current_url.clone_from(&next);
        self.last_written.clone_from(&next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_hydrates() {
        let mut binding = ParamBinding::new("barcode");
        assert_eq!(binding.observe_url("?barcode=4870001").as_deref(), Some("4870001"));

        let mut empty = ParamBinding::new("orderId");
        assert_eq!(empty.observe_url("").as_deref(), Some(""));
    }

    #[test]
    fn test_commit_is_idempotent_and_echo_is_ignored() {
        let mut binding = ParamBinding::new("orderId");
        binding.observe_url("");

        let written = binding.commit(" o-42 ").expect("first commit writes");
        assert_eq!(written, "orderId=o-42");
        assert_eq!(binding.commit("o-42"), None);
        assert_eq!(binding.observe_url(&written), None);
    }

    #[test]
    fn test_external_change_rehydrates() {
        let mut binding = ParamBinding::new("topic");
        binding.observe_url("topic=delivery");
        binding.commit("returns");

        assert_eq!(binding.observe_url("topic=payments").as_deref(), Some("payments"));
    }

    #[test]
    fn test_commit_before_observation_is_ignored() {
        let mut binding = ParamBinding::new("page");
        assert_eq!(binding.commit("2"), None);
    }

    #[test]
    fn test_blank_value_removes_param_and_keeps_others() {
        let mut binding = ParamBinding::new("page");
        binding.observe_url("page=2&q=milk");
        assert_eq!(binding.commit("").as_deref(), Some("q=milk"));
    }
}
