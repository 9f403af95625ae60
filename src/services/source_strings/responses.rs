//! Response types for the source strings service.

use crate::types::{DataResponse, JobStatus, ListResponse, SourceStringText};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A text unit for translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceString {
    /// String ID
    pub id: i64,
    /// Project ID
    pub project_id: i64,
    /// Branch ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
    /// String key
    #[serde(default)]
    pub identifier: String,
    /// Source text, plain or plural
    pub text: SourceStringText,
    /// String type (`text`, `asset`, `icu`, `plural`)
    #[serde(rename = "type", default)]
    pub string_type: String,
    /// Context for translators
    #[serde(default)]
    pub context: String,
    /// Maximum translation length (0 means unlimited)
    #[serde(default)]
    pub max_length: i64,
    /// Hidden from translators
    #[serde(default)]
    pub is_hidden: bool,
    /// Duplicate of another string
    #[serde(default)]
    pub is_duplicate: bool,
    /// String this one duplicates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_string_id: Option<i64>,
    /// Attached labels
    #[serde(default)]
    pub label_ids: Vec<i64>,
    /// Link to the string in the Crowdin UI
    #[serde(default)]
    pub web_url: String,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// File ID
    #[serde(default)]
    pub file_id: i64,
    /// Directory ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_id: Option<i64>,
    /// Revision number
    #[serde(default)]
    pub revision: i64,
}

impl SourceString {
    /// A duplicate must point at its master string
    pub fn is_consistent(&self) -> bool {
        !self.is_duplicate || self.master_string_id.is_some()
    }

    /// Whether the text has plural forms
    pub fn is_plural(&self) -> bool {
        self.text.is_plural()
    }
}

/// Response from getting or adding a source string
pub type SourceStringsGetResponse = DataResponse<SourceString>;

/// Response from listing source strings
pub type SourceStringsListResponse = ListResponse<SourceString>;

/// Status of a strings upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStringsUpload {
    /// Upload ID
    pub identifier: String,
    /// Raw status
    pub status: String,
    /// Progress, 0 to 100
    pub progress: i64,
    /// Parameters the upload was started with
    pub attributes: SourceStringsUploadAttributes,
    /// Creation time
    pub created_at: String,
    /// Last update time
    pub updated_at: String,
    /// Start time, once running
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    /// Finish time, once done
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<String>,
}

impl SourceStringsUpload {
    /// Parsed status
    pub fn job_status(&self) -> JobStatus {
        JobStatus::parse(&self.status)
    }
}

/// Parameters of a strings upload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStringsUploadAttributes {
    /// Target branch
    #[serde(default)]
    pub branch_id: i64,
    /// Source storage
    #[serde(default)]
    pub storage_id: i64,
    /// File type
    #[serde(default)]
    pub file_type: String,
    /// Parser version
    #[serde(default)]
    pub parser_version: i64,
    /// Attached labels
    #[serde(default)]
    pub label_ids: Vec<i64>,
    /// Spreadsheet import options
    #[serde(default)]
    pub import_options: UploadImportOptions,
    /// Strings with matching keys are updated
    #[serde(default)]
    pub update_strings: bool,
    /// Cleanup mode enabled
    #[serde(default)]
    pub cleanup_mode: bool,
}

/// Import options as reported back by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImportOptions {
    /// The first row is a header
    #[serde(default)]
    pub first_line_contains_header: bool,
    /// Translations were imported too
    #[serde(default)]
    pub import_translations: bool,
    /// Column name to column index
    #[serde(default)]
    pub scheme: BTreeMap<String, i64>,
}

/// Response from uploading strings or checking an upload
pub type SourceStringsUploadResponse = DataResponse<SourceStringsUpload>;
