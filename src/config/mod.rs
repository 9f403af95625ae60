//! Configuration management for the Crowdin client.
//!
//! Supports configuration via:
//! - Explicit values
//! - Environment variables
//! - Builder pattern

use crate::errors::{ConfigurationError, CrowdinError, CrowdinResult};
use url::Url;

/// Configuration for the Crowdin client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrowdinConfig {
    /// Base URL for API requests
    pub base_url: Url,
    /// Crowdin Enterprise organization
    pub organization: Option<String>,
    base_url_overridden: bool,
}

impl Default for CrowdinConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(crate::DEFAULT_BASE_URL).expect("default base URL is valid"),
            organization: None,
            base_url_overridden: false,
        }
    }
}

impl CrowdinConfig {
    /// Create a new configuration builder
    pub fn builder() -> CrowdinConfigBuilder {
        CrowdinConfigBuilder::new()
    }

    /// Create configuration from environment variables
    pub fn from_env() -> CrowdinResult<Self> {
        let mut builder = CrowdinConfigBuilder::new();

        if let Ok(url) = std::env::var("CROWDIN_BASE_URL") {
            builder = builder.base_url(&url)?;
        }

        if let Ok(org) = std::env::var("CROWDIN_ORGANIZATION") {
            if !org.is_empty() {
                builder = builder.organization(org);
            }
        }

        builder.build()
    }

    /// Base URL every endpoint path is appended to.
    ///
    /// An explicit base URL always wins. Otherwise an organization selects
    /// its Enterprise host, `https://{organization}.api.crowdin.com/api/v2`.
    pub fn api_base(&self) -> CrowdinResult<Url> {
        match &self.organization {
            Some(org) if !self.base_url_overridden => {
                let url = format!(
                    "https://{}.{}/api/v2",
                    org,
                    crate::ENTERPRISE_HOST_SUFFIX
                );
                Url::parse(&url).map_err(|e| {
                    CrowdinError::from(ConfigurationError::InvalidOrganization(format!(
                        "{}: {}",
                        org, e
                    )))
                })
            }
            _ => Ok(self.base_url.clone()),
        }
    }

    /// Build the full URL for an endpoint path
    pub fn build_url(&self, endpoint: &str) -> CrowdinResult<Url> {
        let base = self.api_base()?;
        let url = format!(
            "{}/{}",
            base.as_str().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        Ok(Url::parse(&url)?)
    }

    /// Build the URL for `endpoint` followed by one caller-supplied path
    /// segment, percent-encoding `/`, `?` and `#` inside it.
    pub fn build_url_with_segment(&self, endpoint: &str, segment: &str) -> CrowdinResult<Url> {
        let mut url = self.build_url(endpoint)?;
        url.path_segments_mut()
            .map_err(|_| {
                ConfigurationError::InvalidBaseUrl(format!("{} cannot be a base", self.base_url))
            })?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    /// Validate the configuration
    pub fn validate(&self) -> CrowdinResult<()> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(ConfigurationError::InvalidBaseUrl(format!(
                "unsupported scheme `{}`",
                self.base_url.scheme()
            ))
            .into());
        }

        if let Some(org) = &self.organization {
            let valid = !org.is_empty()
                && !org.starts_with('-')
                && !org.ends_with('-')
                && org.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
            if !valid {
                return Err(ConfigurationError::InvalidOrganization(org.clone()).into());
            }
        }

        Ok(())
    }
}

/// Builder for CrowdinConfig
#[derive(Debug, Default)]
pub struct CrowdinConfigBuilder {
    config: CrowdinConfig,
}

impl CrowdinConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: CrowdinConfig::default(),
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.base_url = Url::parse(url)
            .map_err(|e| ConfigurationError::InvalidBaseUrl(format!("{}: {}", url, e)))?;
        self.config.base_url_overridden = true;
        Ok(self)
    }

    /// Set the Crowdin Enterprise organization
    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.config.organization = Some(organization.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> CrowdinResult<CrowdinConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build the configuration without validation (for testing)
    pub fn build_unchecked(self) -> CrowdinConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_base() {
        let config = CrowdinConfig::default();
        assert_eq!(
            config.api_base().unwrap().as_str(),
            "https://api.crowdin.com/api/v2"
        );
    }

    #[test]
    fn test_enterprise_api_base() {
        let config = CrowdinConfig::builder()
            .organization("acme")
            .build()
            .unwrap();
        assert_eq!(
            config.api_base().unwrap().as_str(),
            "https://acme.api.crowdin.com/api/v2"
        );
    }

    #[test]
    fn test_explicit_base_url_wins() {
        let config = CrowdinConfig::builder()
            .base_url("http://localhost:8080/api/v2/")
            .unwrap()
            .organization("acme")
            .build()
            .unwrap();
        assert_eq!(
            config.build_url("/projects/1/strings").unwrap().as_str(),
            "http://localhost:8080/api/v2/projects/1/strings"
        );
    }

    #[test]
    fn test_build_url() {
        let config = CrowdinConfig::default();
        assert_eq!(
            config.build_url("projects/7/translations/builds").unwrap().as_str(),
            "https://api.crowdin.com/api/v2/projects/7/translations/builds"
        );
    }

    #[test]
    fn test_build_url_with_segment_encodes() {
        let config = CrowdinConfig::default();
        assert_eq!(
            config
                .build_url_with_segment("projects/1/translations", "../x")
                .unwrap()
                .as_str(),
            "https://api.crowdin.com/api/v2/projects/1/translations/..%2Fx"
        );
        assert_eq!(
            config
                .build_url_with_segment("projects/1/pre-translations", "a?b#c")
                .unwrap()
                .as_str(),
            "https://api.crowdin.com/api/v2/projects/1/pre-translations/a%3Fb%23c"
        );
    }

    #[test]
    fn test_invalid_organization() {
        assert!(CrowdinConfig::builder().organization("bad org").build().is_err());
        assert!(CrowdinConfig::builder().organization("-acme").build().is_err());
        assert!(CrowdinConfig::builder().organization("").build().is_err());
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(CrowdinConfigBuilder::new().base_url("not a url").is_err());

        let result = CrowdinConfigBuilder::new()
            .base_url("ftp://example.com/api")
            .unwrap()
            .build();
        assert!(result.is_err());
    }
}
