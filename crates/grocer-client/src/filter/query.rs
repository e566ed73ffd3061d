//! Filter query and query-string helpers.
//!
//! Query strings are handled without the leading `?`. Values are
//! form-urlencoded the way browsers encode `URLSearchParams`.

use url::form_urlencoded;

/// Free-text search parameter.
pub const SEARCH_PARAM: &str = "q";
/// Category filter parameter.
pub const CATEGORY_PARAM: &str = "categoryId";

/// Catalog filter. Empty fields mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterQuery {
    pub search_text: String,
    /// Empty means all categories
    pub category_id: String,
}

impl FilterQuery {
    pub fn new(search_text: impl Into<String>, category_id: impl Into<String>) -> Self {
        Self { search_text: search_text.into(), category_id: category_id.into() }
    }

    /// Reads `q` and `categoryId`; absent parameters are empty.
    pub fn from_query_string(query: &str) -> Self {
        let query = strip_query_prefix(query);
        Self {
            search_text: get_param(query, SEARCH_PARAM).unwrap_or_default(),
            category_id: get_param(query, CATEGORY_PARAM).unwrap_or_default(),
        }
    }

    /// Both fields trimmed.
    pub fn normalized(&self) -> Self {
        Self::new(self.search_text.trim(), self.category_id.trim())
    }

    pub fn is_empty(&self) -> bool {
        self.search_text.trim().is_empty() && self.category_id.trim().is_empty()
    }

    /// `q=..&categoryId=..` with empty fields omitted.
    pub fn to_query_string(&self) -> String {
        set_params("", &self.params())
    }

    /// Writes this filter over `current`, keeping every other parameter.
    pub fn merge_into(&self, current: &str) -> String {
        set_params(current, &self.params())
    }

    fn params(&self) -> [(&str, &str); 2] {
        [(SEARCH_PARAM, self.search_text.as_str()), (CATEGORY_PARAM, self.category_id.as_str())]
    }
}

pub fn strip_query_prefix(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}

/// `?query`, or an empty string for an empty query.
pub fn to_search(query: &str) -> String {
    if query.is_empty() {
        String::new()
    } else {
        format!("?{}", query)
    }
}

/// First value of `key`.
pub fn get_param(query: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(strip_query_prefix(query).as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Rewrites `current` so each key in `updates` carries its trimmed value,
/// or is removed when that value is blank.
///
/// Updated keys come first, in `updates` order; untouched parameters
/// follow in their original order.
pub fn set_params(current: &str, updates: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in updates {
        let value = value.trim();
        if !value.is_empty() {
            serializer.append_pair(key, value);
        }
    }
    for (key, value) in form_urlencoded::parse(strip_query_prefix(current).as_bytes()) {
        if !updates.iter().any(|(k, _)| *k == key) {
            serializer.append_pair(&key, &value);
        }
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_in_stable_order() {
        let query = FilterQuery::new("milk", "dairy");
        assert_eq!(query.to_query_string(), "q=milk&categoryId=dairy");
        assert_eq!(to_search(&query.to_query_string()), "?q=milk&categoryId=dairy");
    }

    #[test]
    fn test_empty_filter_omits_both_params() {
        assert_eq!(FilterQuery::new("", "").to_query_string(), "");
        assert_eq!(FilterQuery::new("  ", "").to_query_string(), "");
        assert_eq!(to_search(""), "");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let query = FilterQuery::new("oat milk & honey", "c/1");
        let qs = query.to_query_string();
        assert_eq!(qs, "q=oat+milk+%26+honey&categoryId=c%2F1");
        assert_eq!(FilterQuery::from_query_string(&qs), query);
    }

    #[test]
    fn test_parse_accepts_leading_question_mark() {
        let query = FilterQuery::from_query_string("?categoryId=dairy&q=milk");
        assert_eq!(query, FilterQuery::new("milk", "dairy"));
        assert_eq!(FilterQuery::from_query_string(""), FilterQuery::default());
    }

    #[test]
    fn test_merge_keeps_foreign_params() {
        let merged = FilterQuery::new("milk", "").merge_into("page=2&categoryId=old&utm=x");
        assert_eq!(merged, "q=milk&page=2&utm=x");
    }

    #[test]
    fn test_get_param_first_wins() {
        assert_eq!(get_param("a=1&a=2", "a").as_deref(), Some("1"));
        assert_eq!(get_param("a=1", "b"), None);
    }
}
