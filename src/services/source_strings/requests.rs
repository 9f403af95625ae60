//! Request and option types for the source strings service.

use crate::errors::{CrowdinResult, ValidationError};
use crate::types::{join_int_slice, join_slice, ListOptions, QueryParams, QueryValues, SourceStringText};
use crate::validation::{require_nonzero, RequestValidator};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Adds `denormalizePlaceholders` only for its documented values, 0 and 1.
/// Anything else is dropped rather than rejected.
fn add_denormalize_placeholders(v: &mut QueryValues, value: Option<i32>) {
    if let Some(flag @ (0 | 1)) = value {
        v.add("denormalizePlaceholders", flag.to_string());
    }
}

/// Field a string filter applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringScope {
    /// String identifier (key)
    Identifier,
    /// Source text
    Text,
    /// Context note
    Context,
}

impl fmt::Display for StringScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Identifier => "identifier",
            Self::Text => "text",
            Self::Context => "context",
        })
    }
}

/// Options for listing source strings
///
/// The API accepts at most one of `fileId`, `branchId` and `directoryId`,
/// and `croql` only alongside `denormalizePlaceholders`, `offset` and
/// `limit`. Those combinations are left for the server to reject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceStringsListOptions {
    /// Pagination and ordering
    pub list: ListOptions,
    /// Enable denormalized placeholders (0 or 1)
    pub denormalize_placeholders: Option<i32>,
    /// Only strings carrying these labels
    pub label_ids: Vec<i64>,
    /// Only strings in this file
    pub file_id: Option<i64>,
    /// Only strings in this branch
    pub branch_id: Option<i64>,
    /// Only strings in this directory
    pub directory_id: Option<i64>,
    /// CroQL filter expression
    pub croql: Option<String>,
    /// Match against identifier, text or context
    pub filter: Option<String>,
    /// Fields `filter` applies to
    pub scope: Vec<StringScope>,
}

impl SourceStringsListOptions {
    /// Create empty list options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set pagination and ordering
    pub fn list(mut self, list: ListOptions) -> Self {
        self.list = list;
        self
    }

    /// Set the denormalize-placeholders flag
    pub fn denormalize_placeholders(mut self, value: i32) -> Self {
        self.denormalize_placeholders = Some(value);
        self
    }

    /// Filter by labels
    pub fn label_ids(mut self, label_ids: Vec<i64>) -> Self {
        self.label_ids = label_ids;
        self
    }

    /// Filter by file
    pub fn file_id(mut self, file_id: i64) -> Self {
        self.file_id = Some(file_id);
        self
    }

    /// Filter by branch
    pub fn branch_id(mut self, branch_id: i64) -> Self {
        self.branch_id = Some(branch_id);
        self
    }

    /// Filter by directory
    pub fn directory_id(mut self, directory_id: i64) -> Self {
        self.directory_id = Some(directory_id);
        self
    }

    /// Filter with a CroQL expression
    pub fn croql(mut self, croql: impl Into<String>) -> Self {
        self.croql = Some(croql.into());
        self
    }

    /// Filter by text
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Restrict the text filter to some fields
    pub fn scope(mut self, scope: Vec<StringScope>) -> Self {
        self.scope = scope;
        self
    }
}

impl QueryParams for SourceStringsListOptions {
    fn values(&self) -> QueryValues {
        let mut v = self.list.values();
        add_denormalize_placeholders(&mut v, self.denormalize_placeholders);
        v.add_non_empty("labelIds", &join_int_slice(&self.label_ids));
        v.add_positive("fileId", self.file_id);
        v.add_positive("branchId", self.branch_id);
        v.add_positive("directoryId", self.directory_id);
        v.add_opt_str("croql", self.croql.as_deref());
        v.add_opt_str("filter", self.filter.as_deref());
        v.add_non_empty("scope", &join_slice(&self.scope));
        v
    }
}

/// Options for getting one source string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceStringsGetOptions {
    /// Enable denormalized placeholders (0 or 1)
    pub denormalize_placeholders: Option<i32>,
}

impl SourceStringsGetOptions {
    /// Create empty get options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the denormalize-placeholders flag
    pub fn denormalize_placeholders(mut self, value: i32) -> Self {
        self.denormalize_placeholders = Some(value);
        self
    }
}

impl QueryParams for SourceStringsGetOptions {
    fn values(&self) -> QueryValues {
        let mut v = QueryValues::new();
        add_denormalize_placeholders(&mut v, self.denormalize_placeholders);
        v
    }
}

/// Request to add a source string
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStringsAddRequest {
    /// Text for translation, plain or plural
    pub text: SourceStringText,
    /// File the string belongs to
    pub file_id: i64,
    /// Unique string key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Context for translators
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Hide the string from translators
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    /// Maximum translation length (0 means unlimited)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    /// Labels to attach
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<i64>,
    /// Custom fields (Enterprise only)
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub fields: HashMap<String, String>,
}

impl SourceStringsAddRequest {
    /// Create a new add request
    pub fn new(text: impl Into<SourceStringText>, file_id: i64) -> Self {
        Self {
            text: text.into(),
            file_id,
            identifier: None,
            context: None,
            is_hidden: None,
            max_length: None,
            label_ids: Vec::new(),
            fields: HashMap::new(),
        }
    }

    /// Create a new add request with plural forms
    pub fn plural(forms: BTreeMap<String, String>, file_id: i64) -> Self {
        Self::new(SourceStringText::Plural(forms), file_id)
    }

    /// Set the identifier
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Set the context
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Hide or show the string
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.is_hidden = Some(hidden);
        self
    }

    /// Set the maximum translation length
    pub fn max_length(mut self, max_length: i64) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Attach labels
    pub fn label_ids(mut self, label_ids: Vec<i64>) -> Self {
        self.label_ids = label_ids;
        self
    }

    /// Set a custom field
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

impl RequestValidator for SourceStringsAddRequest {
    fn validate(&self) -> CrowdinResult<()> {
        if self.text.is_empty() {
            return Err(ValidationError::Empty { field: "text" }.into());
        }
        require_nonzero("fileId", self.file_id)
    }
}

/// Format of a strings file for string-based projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StringsFileType {
    /// Detect by extension or MIME type
    Auto,
    /// Android (*.xml)
    Android,
    /// Mac OS X / iOS (*.strings)
    Macosx,
    /// Application Resource Bundle (*.arb)
    Arb,
    /// Comma Separated Values (*.csv)
    Csv,
    /// Generic JSON (*.json)
    Json,
    /// Microsoft Excel (*.xlsx)
    Xlsx,
    /// XLIFF (*.xliff, *.xlf)
    Xliff,
    /// XLIFF 2.0 (*.xliff, *.xlf)
    XliffTwo,
}

/// Request to upload strings from a stored file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStringsUploadRequest {
    /// Storage holding the file
    pub storage_id: i64,
    /// Branch the strings are added to
    pub branch_id: i64,
    /// File format, `auto` when unset
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<StringsFileType>,
    /// Parser version; must be used together with `type`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_version: Option<i64>,
    /// Labels to attach to the strings
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<i64>,
    /// Update strings that have the same keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_strings: Option<bool>,
    /// Delete labelled strings that are missing from the file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup_mode: Option<bool>,
    /// Spreadsheet import options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_options: Option<SourceStringsImportOptions>,
}

impl SourceStringsUploadRequest {
    /// Create a new upload request
    pub fn new(storage_id: i64, branch_id: i64) -> Self {
        Self {
            storage_id,
            branch_id,
            file_type: None,
            parser_version: None,
            label_ids: Vec::new(),
            update_strings: None,
            cleanup_mode: None,
            import_options: None,
        }
    }

    /// Set the file type and, optionally, a parser version for it
    pub fn file_type(mut self, file_type: StringsFileType, parser_version: Option<i64>) -> Self {
        self.file_type = Some(file_type);
        self.parser_version = parser_version;
        self
    }

    /// Attach labels
    pub fn label_ids(mut self, label_ids: Vec<i64>) -> Self {
        self.label_ids = label_ids;
        self
    }

    /// Update strings with matching keys
    pub fn update_strings(mut self, update: bool) -> Self {
        self.update_strings = Some(update);
        self
    }

    /// Enable cleanup mode
    pub fn cleanup_mode(mut self, cleanup: bool) -> Self {
        self.cleanup_mode = Some(cleanup);
        self
    }

    /// Set spreadsheet import options
    pub fn import_options(mut self, options: SourceStringsImportOptions) -> Self {
        self.import_options = Some(options);
        self
    }
}

impl RequestValidator for SourceStringsUploadRequest {
    fn validate(&self) -> CrowdinResult<()> {
        require_nonzero("storageId", self.storage_id)?;
        require_nonzero("branchId", self.branch_id)
    }
}

/// Options for importing strings from spreadsheets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStringsImportOptions {
    /// The first row is a header and is not imported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_line_contains_header: Option<bool>,
    /// Import translations from the file too
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_translations: Option<bool>,
    /// Column name to zero-based column index
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub scheme: BTreeMap<String, i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_add_request_plain_passes() {
        assert!(SourceStringsAddRequest::new("hello", 5).validate().is_ok());
    }

    #[test]
    fn test_add_request_empty_text() {
        let err = SourceStringsAddRequest::new("", 5).validate().unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::Empty { field: "text" }));
        assert_eq!(err.as_validation().unwrap().to_string(), "text cannot be empty");

        let err = SourceStringsAddRequest::plural(BTreeMap::new(), 5)
            .validate()
            .unwrap_err();
        assert_eq!(err.as_validation().unwrap().to_string(), "text cannot be empty");
    }

    #[test]
    fn test_add_request_requires_file() {
        let err = SourceStringsAddRequest::new("hello", 0).validate().unwrap_err();
        assert_eq!(err.as_validation().unwrap().to_string(), "fileId is required");
    }

    #[test]
    fn test_add_request_wire_format() {
        let request = SourceStringsAddRequest::new(
            SourceStringText::plural([("one", "file"), ("other", "files")]),
            12,
        )
        .identifier("files.count")
        .hidden(false)
        .label_ids(vec![1, 2]);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "text": {"one": "file", "other": "files"},
                "fileId": 12,
                "identifier": "files.count",
                "isHidden": false,
                "labelIds": [1, 2]
            })
        );
    }

    #[test_case(0, 1, Some("storageId is required"))]
    #[test_case(1, 0, Some("branchId is required"))]
    #[test_case(0, 0, Some("storageId is required"))]
    #[test_case(1, 1, None)]
    fn test_upload_request(storage_id: i64, branch_id: i64, expected: Option<&str>) {
        let result = SourceStringsUploadRequest::new(storage_id, branch_id).validate();
        assert_eq!(
            result.err().map(|e| e.as_validation().unwrap().to_string()),
            expected.map(str::to_string)
        );
    }

    #[test]
    fn test_upload_request_wire_format() {
        let request = SourceStringsUploadRequest::new(61, 38)
            .file_type(StringsFileType::XliffTwo, Some(1))
            .import_options(SourceStringsImportOptions {
                first_line_contains_header: Some(true),
                import_translations: None,
                scheme: BTreeMap::from([("identifier".to_string(), 0), ("sourcePhrase".to_string(), 1)]),
            });

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "storageId": 61,
                "branchId": 38,
                "type": "xliff_two",
                "parserVersion": 1,
                "importOptions": {
                    "firstLineContainsHeader": true,
                    "scheme": {"identifier": 0, "sourcePhrase": 1}
                }
            })
        );
    }

    #[test_case(None, None)]
    #[test_case(Some(0), Some("0"))]
    #[test_case(Some(1), Some("1"))]
    #[test_case(Some(2), None)]
    #[test_case(Some(-1), None)]
    fn test_denormalize_placeholders(flag: Option<i32>, expected: Option<&str>) {
        let get = SourceStringsGetOptions {
            denormalize_placeholders: flag,
        };
        assert_eq!(get.values().get("denormalizePlaceholders"), expected);

        let list = SourceStringsListOptions {
            denormalize_placeholders: flag,
            ..Default::default()
        };
        assert_eq!(list.values().get("denormalizePlaceholders"), expected);
    }

    #[test]
    fn test_list_options_values() {
        let opts = SourceStringsListOptions::new()
            .list(ListOptions::new().limit(10).offset(20))
            .denormalize_placeholders(1)
            .label_ids(vec![1, 2, 3])
            .file_id(5)
            .branch_id(0)
            .filter("welcome")
            .scope(vec![StringScope::Identifier, StringScope::Text]);

        assert_eq!(
            opts.values().iter().collect::<Vec<_>>(),
            vec![
                ("limit", "10"),
                ("offset", "20"),
                ("denormalizePlaceholders", "1"),
                ("labelIds", "1,2,3"),
                ("fileId", "5"),
                ("filter", "welcome"),
                ("scope", "identifier,text"),
            ]
        );
    }

    #[test]
    fn test_empty_list_options() {
        assert!(SourceStringsListOptions::new().values().is_empty());
    }
}
