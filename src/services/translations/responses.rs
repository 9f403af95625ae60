//! Response types for the translations service.

use crate::types::{DataResponse, JobStatus, ListResponse};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Status of a pre-translation job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreTranslation {
    /// Job ID
    pub identifier: String,
    /// Raw status
    pub status: String,
    /// Progress, 0 to 100
    pub progress: i64,
    /// Parameters the job was started with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<PreTranslationAttributes>,
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

impl PreTranslation {
    /// Parsed status
    pub fn job_status(&self) -> JobStatus {
        JobStatus::parse(&self.status)
    }
}

/// Parameters of a pre-translation job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreTranslationAttributes {
    /// Target languages
    #[serde(default)]
    pub language_ids: Vec<String>,
    /// Files
    #[serde(default)]
    pub file_ids: Vec<i64>,
    /// Method (`tm` or `mt`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Auto-approve policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_approve_option: Option<String>,
    /// Duplicate translations added
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate_translations: Option<bool>,
    /// Approved translations skipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_approved_translations: Option<bool>,
    /// Untranslated strings only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_untranslated_only: Option<bool>,
    /// Perfect matches only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_with_perfect_match_only: Option<bool>,
}

/// Response from starting or checking a pre-translation
pub type PreTranslationsResponse = DataResponse<PreTranslation>;

/// A directory build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildProjectDirectoryTranslation {
    /// Build ID
    pub id: i64,
    /// Project ID
    pub project_id: i64,
    /// Raw status
    pub status: String,
    /// Progress, 0 to 100
    pub progress: i64,
    /// Creation time
    pub created_at: String,
    /// Last update time
    pub updated_at: String,
    /// Finish time, once done
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<String>,
}

impl BuildProjectDirectoryTranslation {
    /// Parsed status
    pub fn job_status(&self) -> JobStatus {
        JobStatus::parse(&self.status)
    }
}

/// Response from building a directory
pub type BuildProjectDirectoryTranslationResponse = DataResponse<BuildProjectDirectoryTranslation>;

/// A project build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationsProjectBuild {
    /// Build ID
    pub id: i64,
    /// Project ID
    pub project_id: i64,
    /// Raw status
    pub status: String,
    /// Progress, 0 to 100
    pub progress: i64,
    /// Creation time
    pub created_at: String,
    /// Last update time
    pub updated_at: String,
    /// Finish time, once done
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<String>,
    /// Parameters the build was started with
    #[serde(default)]
    pub attributes: ProjectBuildAttributes,
}

impl TranslationsProjectBuild {
    /// Parsed status
    pub fn job_status(&self) -> JobStatus {
        JobStatus::parse(&self.status)
    }
}

/// Parameters of a project build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectBuildAttributes {
    /// Branch built
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
    /// Directory built
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_id: Option<i64>,
    /// Target languages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_language_ids: Vec<String>,
    /// Untranslated strings skipped
    #[serde(default)]
    pub skip_untranslated_strings: bool,
    /// Untranslated files skipped
    #[serde(default)]
    pub skip_untranslated_files: bool,
    /// Approved strings only
    #[serde(default)]
    pub export_approved_only: bool,
}

/// Response from starting or checking a project build
pub type TranslationsProjectBuildResponse = DataResponse<TranslationsProjectBuild>;

/// Response from listing project builds
pub type TranslationsProjectBuildsListResponse = ListResponse<TranslationsProjectBuild>;

/// Result of a translations import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTranslations {
    /// Project ID
    pub project_id: i64,
    /// Storage the translations came from
    pub storage_id: i64,
    /// Language imported
    pub language_id: String,
    /// File imported into
    #[serde(default)]
    pub file_id: i64,
}

/// Response from uploading translations
pub type UploadTranslationsResponse = DataResponse<UploadTranslations>;

/// Temporary download link for a build or export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadLink {
    /// Download URL
    pub url: String,
    /// Expiry time (RFC 3339)
    pub expire_in: String,
    /// Entity tag of the archive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl DownloadLink {
    /// Parsed expiry time
    pub fn expires_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.expire_in).ok()
    }

    /// Whether the link can no longer be used at `now`.
    ///
    /// A link whose expiry cannot be parsed counts as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(expires_at) => expires_at <= now,
            None => true,
        }
    }

    /// Whether the link has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Response carrying a download link
pub type DownloadLinkResponse = DataResponse<DownloadLink>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_deserialize_pre_translation() {
        let body = json!({
            "data": {
                "identifier": "9e7de270-4f83-41cb-b606-2f90631f26e2",
                "status": "inProgress",
                "progress": 90,
                "attributes": {
                    "languageIds": ["uk"],
                    "fileIds": [742],
                    "method": "tm",
                    "autoApproveOption": "none",
                    "duplicateTranslations": false,
                    "skipApprovedTranslations": false,
                    "translateUntranslatedOnly": true,
                    "translateWithPerfectMatchOnly": false
                },
                "createdAt": "2023-09-20T14:05:50+00:00",
                "updatedAt": "2023-09-20T14:05:50+00:00",
                "startedAt": "2023-09-20T14:05:50+00:00"
            }
        });

        let response: PreTranslationsResponse = serde_json::from_value(body).unwrap();
        let job = response.data;
        assert_eq!(job.job_status(), JobStatus::InProgress);
        assert_eq!(job.progress, 90);
        assert!(job.finished_at.is_none());
        let attributes = job.attributes.unwrap();
        assert_eq!(attributes.file_ids, vec![742]);
        assert_eq!(attributes.translate_untranslated_only, Some(true));
    }

    #[test]
    fn test_deserialize_builds_list() {
        let body = json!({
            "data": [{
                "data": {
                    "id": 2,
                    "projectId": 2,
                    "status": "finished",
                    "progress": 100,
                    "createdAt": "2023-09-20T14:05:50+00:00",
                    "updatedAt": "2023-09-20T14:05:50+00:00",
                    "finishedAt": "2023-09-20T14:05:50+00:00",
                    "attributes": {
                        "branchId": 2,
                        "targetLanguageIds": ["uk", "es"],
                        "skipUntranslatedStrings": true,
                        "skipUntranslatedFiles": false,
                        "exportApprovedOnly": false
                    }
                }
            }],
            "pagination": {"offset": 0, "limit": 25}
        });

        let response: TranslationsProjectBuildsListResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.pagination.map(|p| p.limit), Some(25));
        let builds = response.into_items();
        assert_eq!(builds.len(), 1);
        assert!(builds[0].job_status().is_terminal());
        assert_eq!(builds[0].attributes.branch_id, Some(2));
        assert!(builds[0].attributes.skip_untranslated_strings);
    }

    #[test]
    fn test_deserialize_directory_build_without_finish() {
        let build: BuildProjectDirectoryTranslation = serde_json::from_value(json!({
            "id": 4,
            "projectId": 1,
            "status": "created",
            "progress": 0,
            "createdAt": "2023-09-20T14:05:50+00:00",
            "updatedAt": "2023-09-20T14:05:50+00:00"
        }))
        .unwrap();
        assert_eq!(build.job_status(), JobStatus::Created);
        assert!(build.finished_at.is_none());
    }

    #[test]
    fn test_download_link_expiry() {
        let link: DownloadLink = serde_json::from_value(json!({
            "url": "https://production-enterprise-importer.downloads.crowdin.com/992000002/2/14.xliff",
            "expireIn": "2023-09-20T10:31:21+00:00"
        }))
        .unwrap();
        assert!(link.etag.is_none());

        let before = Utc.with_ymd_and_hms(2023, 9, 20, 10, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2023, 9, 20, 11, 0, 0).unwrap();
        assert!(!link.is_expired_at(before));
        assert!(link.is_expired_at(after));
    }

    #[test]
    fn test_download_link_bad_expiry_counts_as_expired() {
        let link = DownloadLink {
            url: "https://example.com/a.zip".into(),
            expire_in: "soon".into(),
            etag: Some("\"abc\"".into()),
        };
        assert!(link.expires_at().is_none());
        assert!(link.is_expired());
    }

    #[test]
    fn test_deserialize_upload_translations() {
        let response: UploadTranslationsResponse = serde_json::from_value(json!({
            "data": {"projectId": 8, "storageId": 34, "languageId": "uk", "fileId": 56}
        }))
        .unwrap();
        assert_eq!(response.data.language_id, "uk");
        assert_eq!(response.data.file_id, 56);
    }
}
