//! Wire-format tests for responses and fixtures.

use crate::fixtures;
use crate::services::source_strings::{SourceStringsGetResponse, SourceStringsUploadResponse};
use crate::services::translations::{DownloadLinkResponse, TranslationsProjectBuildsListResponse};
use crate::types::{DataResponse, JobStatus, SourceStringText};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_source_string_matches_fixture() {
    let response: SourceStringsGetResponse =
        serde_json::from_value(fixtures::source_string_json()).unwrap();
    assert_eq!(response.data, fixtures::source_string());
}

#[test]
fn test_plural_source_string_text() {
    let string = fixtures::plural_source_string();
    assert!(string.is_plural());
    assert_eq!(string.text.form("one"), Some("{count} video"));
    assert_eq!(string.text.form("few"), None);

    let value = serde_json::to_value(&string).unwrap();
    assert_eq!(
        value["text"],
        json!({"one": "{count} video", "other": "{count} videos"})
    );
}

#[test]
fn test_text_shapes_deserialize() {
    let plain: SourceStringText = serde_json::from_value(json!("hello")).unwrap();
    assert_eq!(plain.as_plain(), Some("hello"));

    let plural: SourceStringText =
        serde_json::from_value(json!({"one": "file", "other": "files"})).unwrap();
    assert!(plural.is_plural());

    assert!(serde_json::from_value::<SourceStringText>(json!(42)).is_err());
    assert!(serde_json::from_value::<SourceStringText>(json!({"one": 1})).is_err());
}

#[test]
fn test_duplicate_consistency() {
    assert!(fixtures::source_string().is_consistent());
    assert!(fixtures::duplicate_source_string().is_consistent());

    let mut orphan = fixtures::duplicate_source_string();
    orphan.master_string_id = None;
    assert!(!orphan.is_consistent());
}

#[test]
fn test_upload_round_trip_keeps_status() {
    let upload = fixtures::strings_upload();
    let value = serde_json::to_value(DataResponse { data: upload.clone() }).unwrap();
    assert_eq!(value["data"]["attributes"]["importOptions"]["scheme"]["sourcePhrase"], 1);

    let parsed: SourceStringsUploadResponse = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.data, upload);
    assert_eq!(parsed.data.job_status(), JobStatus::InProgress);
    assert!(!parsed.data.job_status().is_terminal());
}

#[test]
fn test_pre_translation_fixture_is_finished() {
    let job = fixtures::pre_translation();
    assert_eq!(job.job_status(), JobStatus::Finished);
    assert!(job.job_status().is_terminal());
}

#[test]
fn test_builds_list_fixture() {
    let list: TranslationsProjectBuildsListResponse =
        serde_json::from_value(fixtures::project_builds_json()).unwrap();
    let builds = list.into_items();
    assert_eq!(builds, vec![fixtures::project_build("finished")]);
}

#[test]
fn test_unknown_build_status() {
    let build = fixtures::project_build("queued");
    assert_eq!(build.job_status(), JobStatus::Unknown);
    assert!(!build.job_status().is_terminal());
}

#[test]
fn test_download_link_response() {
    let body = json!({
        "data": serde_json::to_value(fixtures::download_link("2023-09-20T10:31:21+00:00")).unwrap()
    });
    let response: DownloadLinkResponse = serde_json::from_value(body).unwrap();
    let link = response.data;
    assert_eq!(link.etag.as_deref(), Some("\"7d8c3a0d9b1e\""));
    assert!(link.is_expired_at(Utc.with_ymd_and_hms(2023, 9, 21, 0, 0, 0).unwrap()));
    assert!(!link.is_expired_at(Utc.with_ymd_and_hms(2023, 9, 19, 0, 0, 0).unwrap()));
}

#[test]
fn test_request_bodies_omit_unset_fields() {
    let body = serde_json::to_value(fixtures::pseudo_build_request().branch_id(0)).unwrap();
    assert_eq!(body["pseudo"], true);
    assert!(body.get("charTransformation").is_none());
    assert!(body.get("branchId").is_none());
}
