//! Search query parameters with default-merge semantics.

use std::collections::BTreeMap;

/// Default sort order sent with every search unless overridden.
const DEFAULTS: [(&str, &str); 2] = [("order[0][field]", "price"), ("order[0][sort]", "asc")];

/// Parameters for one search, merged over the endpoint defaults.
///
/// The endpoint always receives the price-ascending sort keys; any key the
/// caller supplies (named `category` or an `extra` entry) wins on collision.
/// The page number is appended per request, not stored here.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Value for the `category` form field.
    pub category: Option<String>,
    /// Additional form fields; override defaults with the same key.
    pub extra: BTreeMap<String, String>,
}

impl SearchQuery {
    /// Creates an empty query (defaults only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query restricted to one category.
    pub fn with_category(category: impl Into<String>) -> Self {
        Self { category: Some(category.into()), extra: BTreeMap::new() }
    }

    /// Adds an arbitrary form field, overriding any default with the same key.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Resolves the full form field set for a request against page `page`.
    ///
    /// Merge order: defaults, then `category`, then `extra`, then
    /// `current_page` — later entries overwrite earlier ones.
    pub fn form_params(&self, page: u32) -> BTreeMap<String, String> {
        let mut params: BTreeMap<String, String> =
            DEFAULTS.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();

        if let Some(category) = &self.category {
            params.insert("category".to_string(), category.clone());
        }
        for (key, value) in &self.extra {
            params.insert(key.clone(), value.clone());
        }
        params.insert("current_page".to_string(), page.to_string());
        params
    }

    /// Renders the form fields as an `application/x-www-form-urlencoded` body.
    pub fn form_body(&self, page: u32) -> String {
        self.form_params(page)
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_present() {
        let params = SearchQuery::new().form_params(1);
        assert_eq!(params.get("order[0][field]").map(String::as_str), Some("price"));
        assert_eq!(params.get("order[0][sort]").map(String::as_str), Some("asc"));
        assert_eq!(params.get("current_page").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_caller_key_overrides_default() {
        let params = SearchQuery::new().param("order[0][sort]", "desc").form_params(2);
        assert_eq!(params.get("order[0][sort]").map(String::as_str), Some("desc"));
        // Unrelated default untouched
        assert_eq!(params.get("order[0][field]").map(String::as_str), Some("price"));
        assert_eq!(params.get("current_page").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_category_included() {
        let params = SearchQuery::with_category("resistors").form_params(1);
        assert_eq!(params.get("category").map(String::as_str), Some("resistors"));
    }

    #[test]
    fn test_no_category_no_field() {
        let params = SearchQuery::new().form_params(1);
        assert!(!params.contains_key("category"));
    }

    #[test]
    fn test_form_body_urlencoded() {
        let body = SearchQuery::with_category("op amps").form_body(3);
        assert!(body.contains("category=op%20amps"));
        assert!(body.contains("current_page=3"));
        assert!(body.contains("order%5B0%5D%5Bfield%5D=price"));
        assert!(!body.contains(' '));
    }

    #[test]
    fn test_page_always_wins() {
        // Even an extra param named current_page cannot leak a stale page number.
        let params = SearchQuery::new().param("current_page", "99").form_params(4);
        assert_eq!(params.get("current_page").map(String::as_str), Some("4"));
    }
}
