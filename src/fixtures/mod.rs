//! Test fixtures for Crowdin API resources.
//!
//! Provides realistic requests and responses for unit tests.

use crate::services::source_strings::{
    SourceString, SourceStringsAddRequest, SourceStringsUpload, SourceStringsUploadAttributes,
    SourceStringsUploadRequest, UploadImportOptions,
};
use crate::services::translations::{
    DownloadLink, PreTranslation, PreTranslationAttributes, PreTranslationRequest,
    ProjectBuildAttributes, PseudoBuildProjectRequest, TranslationsProjectBuild,
};
use crate::types::SourceStringText;
use serde_json::{json, Value};
use std::collections::BTreeMap;

const CREATED_AT: &str = "2023-09-20T14:05:50+00:00";

/// Create a fixture plain-text source string
pub fn source_string() -> SourceString {
    SourceString {
        id: 2814,
        project_id: 2,
        branch_id: Some(12),
        identifier: "name".to_string(),
        text: SourceStringText::from("Not all videos are shown to users. See more"),
        string_type: "text".to_string(),
        context: "shown on the main page".to_string(),
        max_length: 35,
        is_hidden: false,
        is_duplicate: false,
        master_string_id: None,
        label_ids: vec![3],
        web_url: "https://example.crowdin.com/editor/1/all/en-pl?filter=basic&value=0#2".to_string(),
        created_at: Some(CREATED_AT.to_string()),
        updated_at: Some(CREATED_AT.to_string()),
        file_id: 48,
        directory_id: Some(13),
        revision: 1,
    }
}

/// Create a fixture plural source string
pub fn plural_source_string() -> SourceString {
    let mut string = source_string();
    string.id = 2815;
    string.identifier = "videos_count".to_string();
    string.string_type = "plural".to_string();
    string.text = plural_text();
    string
}

/// Create a fixture duplicate source string pointing at [`source_string`]
pub fn duplicate_source_string() -> SourceString {
    let mut string = source_string();
    string.id = 2816;
    string.is_duplicate = true;
    string.master_string_id = Some(2814);
    string
}

/// Plural forms for "videos"
pub fn plural_text() -> SourceStringText {
    SourceStringText::plural([("one", "{count} video"), ("other", "{count} videos")])
}

/// Create a fixture strings upload in progress
pub fn strings_upload() -> SourceStringsUpload {
    let mut scheme = BTreeMap::new();
    scheme.insert("identifier".to_string(), 0);
    scheme.insert("sourcePhrase".to_string(), 1);

    SourceStringsUpload {
        identifier: "50fb3506-4127-4ba8-8296-f97dc7e3e0c3".to_string(),
        status: "inProgress".to_string(),
        progress: 60,
        attributes: SourceStringsUploadAttributes {
            branch_id: 38,
            storage_id: 61,
            file_type: "csv".to_string(),
            parser_version: 1,
            label_ids: vec![1],
            import_options: UploadImportOptions {
                first_line_contains_header: true,
                import_translations: false,
                scheme,
            },
            update_strings: false,
            cleanup_mode: false,
        },
        created_at: CREATED_AT.to_string(),
        updated_at: CREATED_AT.to_string(),
        started_at: Some(CREATED_AT.to_string()),
        finished_at: None,
    }
}

/// Create a fixture finished pre-translation
pub fn pre_translation() -> PreTranslation {
    PreTranslation {
        identifier: "9e7de270-4f83-41cb-b606-2f90631f26e2".to_string(),
        status: "finished".to_string(),
        progress: 100,
        attributes: Some(PreTranslationAttributes {
            language_ids: vec!["uk".to_string()],
            file_ids: vec![742],
            method: Some("tm".to_string()),
            auto_approve_option: Some("none".to_string()),
            duplicate_translations: Some(false),
            skip_approved_translations: Some(false),
            translate_untranslated_only: Some(true),
            translate_with_perfect_match_only: Some(false),
        }),
        created_at: CREATED_AT.to_string(),
        updated_at: CREATED_AT.to_string(),
        started_at: Some(CREATED_AT.to_string()),
        finished_at: Some(CREATED_AT.to_string()),
    }
}

/// Create a fixture project build
pub fn project_build(status: &str) -> TranslationsProjectBuild {
    TranslationsProjectBuild {
        id: 2,
        project_id: 2,
        status: status.to_string(),
        progress: if status == "finished" { 100 } else { 0 },
        created_at: CREATED_AT.to_string(),
        updated_at: CREATED_AT.to_string(),
        finished_at: (status == "finished").then(|| CREATED_AT.to_string()),
        attributes: ProjectBuildAttributes {
            branch_id: Some(2),
            directory_id: None,
            target_language_ids: vec!["uk".to_string(), "es".to_string()],
            skip_untranslated_strings: true,
            skip_untranslated_files: false,
            export_approved_only: false,
        },
    }
}

/// Create a fixture download link that expires at `expire_in`
pub fn download_link(expire_in: &str) -> DownloadLink {
    DownloadLink {
        url: "https://production-enterprise-importer.downloads.crowdin.com/992000002/2/14.zip"
            .to_string(),
        expire_in: expire_in.to_string(),
        etag: Some("\"7d8c3a0d9b1e\"".to_string()),
    }
}

/// A valid request to add a plain string
pub fn add_request() -> SourceStringsAddRequest {
    SourceStringsAddRequest::new("Download", 48)
        .identifier("download_button")
        .context("button label")
        .max_length(20)
        .label_ids(vec![3])
}

/// A valid strings upload request
pub fn upload_request() -> SourceStringsUploadRequest {
    SourceStringsUploadRequest::new(61, 38).update_strings(true)
}

/// A valid TM pre-translation request
pub fn pre_translation_request() -> PreTranslationRequest {
    PreTranslationRequest::new(vec!["uk".to_string(), "de".to_string()], vec![742]).via_tm()
}

/// A valid pseudo-translation build request
pub fn pseudo_build_request() -> PseudoBuildProjectRequest {
    PseudoBuildProjectRequest::new()
        .prefix("[")
        .suffix("]")
        .length_transformation(30)
}

/// Source string as returned in a `{"data": ...}` envelope
pub fn source_string_json() -> Value {
    json!({
        "data": {
            "id": 2814,
            "projectId": 2,
            "branchId": 12,
            "identifier": "name",
            "text": "Not all videos are shown to users. See more",
            "type": "text",
            "context": "shown on the main page",
            "maxLength": 35,
            "isHidden": false,
            "isDuplicate": false,
            "masterStringId": null,
            "labelIds": [3],
            "webUrl": "https://example.crowdin.com/editor/1/all/en-pl?filter=basic&value=0#2",
            "createdAt": CREATED_AT,
            "updatedAt": CREATED_AT,
            "fileId": 48,
            "directoryId": 13,
            "revision": 1
        }
    })
}

/// Project build list with a single finished build
pub fn project_builds_json() -> Value {
    json!({
        "data": [{"data": serde_json::to_value(project_build("finished")).unwrap_or(Value::Null)}],
        "pagination": {"offset": 0, "limit": 25}
    })
}
