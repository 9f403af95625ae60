//! Crowdin client: entry point to the per-resource services.

use crate::config::CrowdinConfig;
use crate::errors::CrowdinResult;
use crate::services::{SourceStringsService, TranslationsService};
use url::Url;

/// Client for the Crowdin API.
///
/// Holds configuration only, so it is cheap to clone and safe to share
/// between threads.
#[derive(Debug, Clone)]
pub struct CrowdinClient {
    config: CrowdinConfig,
}

impl CrowdinClient {
    /// Create a client, validating the configuration
    pub fn new(config: CrowdinConfig) -> CrowdinResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &CrowdinConfig {
        &self.config
    }

    /// Source strings endpoints
    pub fn source_strings(&self) -> SourceStringsService<'_> {
        SourceStringsService::new(self)
    }

    /// Pre-translation, build, upload and export endpoints
    pub fn translations(&self) -> TranslationsService<'_> {
        TranslationsService::new(self)
    }

    pub(crate) fn build_url(&self, endpoint: &str) -> CrowdinResult<Url> {
        self.config.build_url(endpoint)
    }

    pub(crate) fn build_url_with_segment(&self, endpoint: &str, segment: &str) -> CrowdinResult<Url> {
        self.config.build_url_with_segment(endpoint, segment)
    }
}
