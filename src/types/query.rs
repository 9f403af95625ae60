//! Query-string construction.
//!
//! Option records only contribute a parameter when it is actually set:
//! strings must be non-empty, identifiers and counters must be positive,
//! and enum-like flags must hold one of their documented values.

use url::form_urlencoded;

/// Ordered collection of query parameters.
///
/// Keeps insertion order and allows repeated keys, matching how the API
/// reads its query strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues {
    pairs: Vec<(String, String)>,
}

impl QueryValues {
    /// Create an empty set of query parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Append a string parameter when it is non-empty
    pub fn add_non_empty(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.add(key, value);
        }
    }

    /// Append an optional string parameter when it is present and non-empty
    pub fn add_opt_str(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.add_non_empty(key, value);
        }
    }

    /// Append an optional numeric parameter when it is present and positive
    pub fn add_positive(&mut self, key: &str, value: Option<i64>) {
        if let Some(value) = value.filter(|v| *v > 0) {
            self.add(key, value.to_string());
        }
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in insertion order
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Whether any value is present for `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no parameters
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Append every parameter from `other`
    pub fn extend(&mut self, other: QueryValues) {
        self.pairs.extend(other.pairs);
    }

    /// Encode as `application/x-www-form-urlencoded`
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Conversion of an options record into query parameters.
pub trait QueryParams {
    /// Query parameters for the fields that are set
    fn values(&self) -> QueryValues;
}

/// Pagination and ordering shared by every list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Sort expression, e.g. `createdAt desc,id`
    pub order_by: Option<String>,
    /// Maximum number of items to retrieve (API default 25, max 500)
    pub limit: Option<i64>,
    /// Starting offset in the collection
    pub offset: Option<i64>,
}

impl ListOptions {
    /// Create empty list options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sort expression
    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    /// Set the page size
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the starting offset
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl QueryParams for ListOptions {
    fn values(&self) -> QueryValues {
        let mut v = QueryValues::new();
        v.add_opt_str("orderBy", self.order_by.as_deref());
        v.add_positive("limit", self.limit);
        v.add_positive("offset", self.offset);
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_values_order_and_lookup() {
        let mut v = QueryValues::new();
        v.add("b", "2");
        v.add("a", "1");
        v.add("b", "3");

        assert_eq!(v.len(), 3);
        assert_eq!(v.get("b"), Some("2"));
        assert_eq!(v.get_all("b"), vec!["2", "3"]);
        assert!(v.contains_key("a"));
        assert!(!v.contains_key("c"));
        assert_eq!(v.encode(), "b=2&a=1&b=3");
    }

    #[test]
    fn test_encode_escapes_values() {
        let v: QueryValues = [("labelIds", "1,2"), ("filter", "a b")].into_iter().collect();
        assert_eq!(v.encode(), "labelIds=1%2C2&filter=a+b");
    }

    #[test]
    fn test_skip_unset_values() {
        let mut v = QueryValues::new();
        v.add_non_empty("filter", "");
        v.add_opt_str("croql", None);
        v.add_opt_str("croql", Some(""));
        v.add_positive("fileId", None);
        v.add_positive("fileId", Some(0));
        v.add_positive("fileId", Some(-4));
        assert!(v.is_empty());
        assert_eq!(v.encode(), "");
    }

    #[test]
    fn test_list_options_values() {
        assert!(ListOptions::new().values().is_empty());

        let opts = ListOptions::new().order_by("createdAt desc").limit(50).offset(10);
        let v = opts.values();
        assert_eq!(
            v.iter().collect::<Vec<_>>(),
            vec![("orderBy", "createdAt desc"), ("limit", "50"), ("offset", "10")]
        );

        let zeroed = ListOptions::new().limit(0).offset(0).order_by("");
        assert!(zeroed.values().is_empty());
    }
}
