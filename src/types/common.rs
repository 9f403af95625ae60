//! Response envelopes.

use serde::{Deserialize, Serialize};

/// Single-resource envelope: `{"data": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    /// The resource
    pub data: T,
}

/// Collection envelope: `{"data": [{"data": {...}}], "pagination": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// The resources, each wrapped in its own envelope
    #[serde(default = "Vec::new")]
    pub data: Vec<DataResponse<T>>,
    /// Position of this page in the collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ListResponse<T> {
    /// Unwrap the per-item envelopes
    pub fn into_items(self) -> Vec<T> {
        self.data.into_iter().map(|item| item.data).collect()
    }
}

/// Pagination block returned with list responses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Offset of the first item
    pub offset: i64,
    /// Page size
    pub limit: i64,
}
