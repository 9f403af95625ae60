//! Translations service implementation.

use super::*;
use crate::client::CrowdinClient;
use crate::errors::CrowdinResult;
use crate::observability::prepared;
use crate::transport::TransportRequest;
use crate::types::QueryParams;
use crate::validation::{
    checked, checked_build, require_path_segment, BuildProjectTranslationRequest,
};
use tracing::instrument;

/// Prepares requests for pre-translation, builds, uploads and exports.
pub struct TranslationsService<'a> {
    client: &'a CrowdinClient,
}

impl<'a> TranslationsService<'a> {
    /// Create a new translations service
    pub fn new(client: &'a CrowdinClient) -> Self {
        Self { client }
    }

    fn project_path(project_id: i64, rest: &str) -> String {
        format!("projects/{}/{}", project_id, rest)
    }

    /// Apply pre-translation.
    ///
    /// `POST /projects/{projectId}/pre-translations`
    #[instrument(skip(self, request))]
    pub fn pre_translate(
        &self,
        project_id: i64,
        request: &PreTranslationRequest,
    ) -> CrowdinResult<TransportRequest> {
        checked("PreTranslationRequest", request)?;
        let url = self
            .client
            .build_url(&Self::project_path(project_id, "pre-translations"))?;
        TransportRequest::post(url, request).map(prepared)
    }

    /// Check a pre-translation.
    ///
    /// `GET /projects/{projectId}/pre-translations/{preTranslationId}`
    #[instrument(skip(self))]
    pub fn pre_translation_status(
        &self,
        project_id: i64,
        pre_translation_id: &str,
    ) -> CrowdinResult<TransportRequest> {
        require_path_segment("preTranslationId", pre_translation_id)?;
        let url = self.client.build_url_with_segment(
            &Self::project_path(project_id, "pre-translations"),
            pre_translation_id,
        )?;
        Ok(prepared(TransportRequest::get(url)))
    }

    /// Build translations of one directory.
    ///
    /// `POST /projects/{projectId}/translations/builds/directories/{directoryId}`
    #[instrument(skip(self, request))]
    pub fn build_directory(
        &self,
        project_id: i64,
        directory_id: i64,
        request: &BuildProjectDirectoryTranslationRequest,
    ) -> CrowdinResult<TransportRequest> {
        checked("BuildProjectDirectoryTranslationRequest", request)?;
        let url = self.client.build_url(&Self::project_path(
            project_id,
            &format!("translations/builds/directories/{}", directory_id),
        ))?;
        TransportRequest::post(url, request).map(prepared)
    }

    /// Build translations of one file.
    ///
    /// `POST /projects/{projectId}/translations/builds/files/{fileId}`
    #[instrument(skip(self, request))]
    pub fn build_file(
        &self,
        project_id: i64,
        file_id: i64,
        request: &BuildProjectFileTranslationRequest,
    ) -> CrowdinResult<TransportRequest> {
        checked("BuildProjectFileTranslationRequest", request)?;
        let url = self.client.build_url(&Self::project_path(
            project_id,
            &format!("translations/builds/files/{}", file_id),
        ))?;
        TransportRequest::post(url, request).map(prepared)
    }

    /// List project builds.
    ///
    /// `GET /projects/{projectId}/translations/builds`
    #[instrument(skip(self, options))]
    pub fn list_builds(
        &self,
        project_id: i64,
        options: &TranslationsBuildsListOptions,
    ) -> CrowdinResult<TransportRequest> {
        let url = self
            .client
            .build_url(&Self::project_path(project_id, "translations/builds"))?;
        Ok(prepared(TransportRequest::get(url).with_query(&options.values())))
    }

    /// Build the project, regular or pseudo-translated.
    ///
    /// `POST /projects/{projectId}/translations/builds`
    #[instrument(skip(self, request))]
    pub fn build_project<R: BuildProjectTranslationRequest>(
        &self,
        project_id: i64,
        request: &R,
    ) -> CrowdinResult<TransportRequest> {
        checked_build(std::any::type_name::<R>(), request)?;
        let url = self
            .client
            .build_url(&Self::project_path(project_id, "translations/builds"))?;
        TransportRequest::post(url, request).map(prepared)
    }

    /// Check a project build.
    ///
    /// `GET /projects/{projectId}/translations/builds/{buildId}`
    #[instrument(skip(self))]
    pub fn build_status(&self, project_id: i64, build_id: i64) -> CrowdinResult<TransportRequest> {
        let url = self.client.build_url(&Self::project_path(
            project_id,
            &format!("translations/builds/{}", build_id),
        ))?;
        Ok(prepared(TransportRequest::get(url)))
    }

    /// Get a download link for a finished build.
    ///
    /// `GET /projects/{projectId}/translations/builds/{buildId}/download`
    #[instrument(skip(self))]
    pub fn download_build(&self, project_id: i64, build_id: i64) -> CrowdinResult<TransportRequest> {
        let url = self.client.build_url(&Self::project_path(
            project_id,
            &format!("translations/builds/{}/download", build_id),
        ))?;
        Ok(prepared(TransportRequest::get(url)))
    }

    /// Cancel a running build.
    ///
    /// `DELETE /projects/{projectId}/translations/builds/{buildId}`
    #[instrument(skip(self))]
    pub fn cancel_build(&self, project_id: i64, build_id: i64) -> CrowdinResult<TransportRequest> {
        let url = self.client.build_url(&Self::project_path(
            project_id,
            &format!("translations/builds/{}", build_id),
        ))?;
        Ok(prepared(TransportRequest::delete(url)))
    }

    /// Import translations for one language.
    ///
    /// `POST /projects/{projectId}/translations/{languageId}`
    #[instrument(skip(self, request))]
    pub fn upload_translations(
        &self,
        project_id: i64,
        language_id: &str,
        request: &UploadTranslationsRequest,
    ) -> CrowdinResult<TransportRequest> {
        require_path_segment("languageId", language_id)?;
        checked("UploadTranslationsRequest", request)?;
        let url = self.client.build_url_with_segment(
            &Self::project_path(project_id, "translations"),
            language_id,
        )?;
        TransportRequest::post(url, request).map(prepared)
    }

    /// Export translations of one language.
    ///
    /// `POST /projects/{projectId}/translations/exports`
    #[instrument(skip(self, request))]
    pub fn export(
        &self,
        project_id: i64,
        request: &ExportTranslationRequest,
    ) -> CrowdinResult<TransportRequest> {
        checked("ExportTranslationRequest", request)?;
        let url = self
            .client
            .build_url(&Self::project_path(project_id, "translations/exports"))?;
        TransportRequest::post(url, request).map(prepared)
    }
}
