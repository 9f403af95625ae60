//! Prepared requests handed to an HTTP client.
//!
//! The crate never opens a connection. Service methods return a
//! [`TransportRequest`] with the method, the full URL (query included) and
//! the JSON body; sending it, attaching credentials and retrying are up to
//! the caller's HTTP stack.

use crate::errors::CrowdinResult;
use crate::types::QueryValues;
use http::Method;
use serde::Serialize;
use url::Url;

/// A fully built API request
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including the query string
    pub url: Url,
    /// JSON body, for methods that carry one
    pub body: Option<serde_json::Value>,
}

impl TransportRequest {
    /// Create a new GET request
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            body: None,
        }
    }

    /// Create a new DELETE request
    pub fn delete(url: Url) -> Self {
        Self {
            method: Method::DELETE,
            url,
            body: None,
        }
    }

    /// Create a new POST request with a JSON body
    pub fn post<T: Serialize + ?Sized>(url: Url, body: &T) -> CrowdinResult<Self> {
        Ok(Self {
            method: Method::POST,
            url,
            body: Some(serde_json::to_value(body)?),
        })
    }

    /// Append query parameters to the URL
    pub fn with_query(mut self, query: &QueryValues) -> Self {
        if !query.is_empty() {
            self.url.query_pairs_mut().extend_pairs(query.iter());
        }
        self
    }

    /// Path component of the URL
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Query parameters as they appear on the URL
    pub fn query(&self) -> QueryValues {
        self.url.query_pairs().collect()
    }

    /// Body serialized to a JSON string, if there is one
    pub fn body_string(&self) -> Option<String> {
        self.body.as_ref().map(|body| body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn url() -> Url {
        Url::parse("https://api.crowdin.com/api/v2/projects/1/strings").unwrap()
    }

    #[test]
    fn test_get_with_query() {
        let mut q = QueryValues::new();
        q.add("limit", "10");
        q.add("labelIds", "1,2");

        let request = TransportRequest::get(url()).with_query(&q);
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path(), "/api/v2/projects/1/strings");
        assert_eq!(
            request.url.as_str(),
            "https://api.crowdin.com/api/v2/projects/1/strings?limit=10&labelIds=1%2C2"
        );
        assert_eq!(request.query(), q);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_empty_query_leaves_url_untouched() {
        let request = TransportRequest::delete(url()).with_query(&QueryValues::new());
        assert_eq!(request.url.query(), None);
        assert_eq!(request.method, Method::DELETE);
    }

    #[test]
    fn test_post_body() {
        let request = TransportRequest::post(url(), &json!({"fileId": 1})).unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body, Some(json!({"fileId": 1})));
        assert_eq!(request.body_string().as_deref(), Some(r#"{"fileId":1}"#));
    }
}
