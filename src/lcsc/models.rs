//! Wire types for the LCSC search endpoint.
//!
//! Item records are kept as raw [`serde_json::Value`] trees: the path
//! filter and the formatter both operate on arbitrary nested structure, so
//! flattening into a fixed struct would lose the fields a filter expression
//! may want to reach.

use crate::lcsc::FetchError;
use serde::Deserialize;
use serde_json::Value;

/// Top-level JSON body returned by the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    /// Present when `success` is false.
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Option<SearchResult>,
}

/// The `result` object of a successful response.
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub last_page: u32,
    pub data: Vec<Value>,
}

/// One decoded page of search results.
#[derive(Debug, Clone)]
pub struct Page {
    /// Total page count as reported by this response.
    pub last_page: u32,
    /// Item records in server order.
    pub items: Vec<Value>,
}

impl SearchResponse {
    /// Converts the wire response into a [`Page`], surfacing server-side
    /// rejection (`success: false`) as [`FetchError::Remote`].
    pub fn into_page(self) -> Result<Page, FetchError> {
        if !self.success {
            let message =
                self.message.unwrap_or_else(|| "no error message provided".to_string());
            return Err(FetchError::Remote(message));
        }

        let result = self.result.ok_or(FetchError::MissingResult)?;
        Ok(Page { last_page: result.last_page, items: result.data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_success_response() {
        let body = json!({
            "success": true,
            "result": {
                "last_page": 7,
                "data": [{"info": {"number": "C123"}}, {"info": {"number": "C456"}}]
            }
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        let page = response.into_page().unwrap();
        assert_eq!(page.last_page, 7);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0]["info"]["number"], "C123");
    }

    #[test]
    fn test_failure_response_carries_message() {
        let body = json!({"success": false, "message": "quota exceeded"});

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        let err = response.into_page().unwrap_err();
        assert!(matches!(err, FetchError::Remote(ref m) if m == "quota exceeded"));
    }

    #[test]
    fn test_failure_without_message() {
        let body = json!({"success": false});

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        let err = response.into_page().unwrap_err();
        assert!(matches!(err, FetchError::Remote(_)));
    }

    #[test]
    fn test_success_without_result_is_error() {
        let body = json!({"success": true});

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        let err = response.into_page().unwrap_err();
        assert!(matches!(err, FetchError::MissingResult));
    }

    #[test]
    fn test_empty_data_page() {
        let body = json!({"success": true, "result": {"last_page": 0, "data": []}});

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        let page = response.into_page().unwrap();
        assert_eq!(page.last_page, 0);
        assert!(page.items.is_empty());
    }
}
