//! Source strings service implementation.

use super::*;
use crate::client::CrowdinClient;
use crate::errors::CrowdinResult;
use crate::observability::prepared;
use crate::transport::TransportRequest;
use crate::types::QueryParams;
use crate::validation::{checked, require_path_segment};
use tracing::instrument;

/// Prepares requests for the source strings endpoints
/// (string-based and file-based projects).
pub struct SourceStringsService<'a> {
    client: &'a CrowdinClient,
}

impl<'a> SourceStringsService<'a> {
    /// Create a new source strings service
    pub fn new(client: &'a CrowdinClient) -> Self {
        Self { client }
    }

    /// List source strings.
    ///
    /// `GET /projects/{projectId}/strings`
    #[instrument(skip(self, options))]
    pub fn list(
        &self,
        project_id: i64,
        options: &SourceStringsListOptions,
    ) -> CrowdinResult<TransportRequest> {
        let url = self.client.build_url(&format!("projects/{}/strings", project_id))?;
        Ok(prepared(TransportRequest::get(url).with_query(&options.values())))
    }

    /// Get a source string.
    ///
    /// `GET /projects/{projectId}/strings/{stringId}`
    #[instrument(skip(self, options))]
    pub fn get(
        &self,
        project_id: i64,
        string_id: i64,
        options: &SourceStringsGetOptions,
    ) -> CrowdinResult<TransportRequest> {
        let url = self
            .client
            .build_url(&format!("projects/{}/strings/{}", project_id, string_id))?;
        Ok(prepared(TransportRequest::get(url).with_query(&options.values())))
    }

    /// Add a source string.
    ///
    /// `POST /projects/{projectId}/strings`
    #[instrument(skip(self, request))]
    pub fn add(
        &self,
        project_id: i64,
        request: &SourceStringsAddRequest,
    ) -> CrowdinResult<TransportRequest> {
        checked("SourceStringsAddRequest", request)?;
        let url = self.client.build_url(&format!("projects/{}/strings", project_id))?;
        TransportRequest::post(url, request).map(prepared)
    }

    /// Delete a source string.
    ///
    /// `DELETE /projects/{projectId}/strings/{stringId}`
    #[instrument(skip(self))]
    pub fn delete(&self, project_id: i64, string_id: i64) -> CrowdinResult<TransportRequest> {
        let url = self
            .client
            .build_url(&format!("projects/{}/strings/{}", project_id, string_id))?;
        Ok(prepared(TransportRequest::delete(url)))
    }

    /// Upload strings from storage (string-based projects).
    ///
    /// `POST /projects/{projectId}/strings/uploads`
    #[instrument(skip(self, request))]
    pub fn upload(
        &self,
        project_id: i64,
        request: &SourceStringsUploadRequest,
    ) -> CrowdinResult<TransportRequest> {
        checked("SourceStringsUploadRequest", request)?;
        let url = self
            .client
            .build_url(&format!("projects/{}/strings/uploads", project_id))?;
        TransportRequest::post(url, request).map(prepared)
    }

    /// Check the status of a strings upload.
    ///
    /// `GET /projects/{projectId}/strings/uploads/{uploadId}`
    #[instrument(skip(self))]
    pub fn upload_status(&self, project_id: i64, upload_id: &str) -> CrowdinResult<TransportRequest> {
        require_path_segment("uploadId", upload_id)?;
        let url = self
            .client
            .build_url_with_segment(&format!("projects/{}/strings/uploads", project_id), upload_id)?;
        Ok(prepared(TransportRequest::get(url)))
    }
}
