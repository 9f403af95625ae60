//! Crowdin API Client
//!
//! Typed bindings for the Crowdin API v2 with:
//! - Resource models for source strings, pre-translations, builds and uploads
//! - Request validation before anything leaves the process
//! - Query-parameter construction for list and get options
//! - Fully prepared requests (method, URL, JSON body) for an HTTP client of your choice
//!
//! # Quick Start
//!
//! ```rust
//! use crowdin_client::services::translations::PreTranslationRequest;
//! use crowdin_client::{CrowdinClient, CrowdinConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CrowdinClient::new(CrowdinConfig::default())?;
//!
//! let request = PreTranslationRequest::new(vec!["uk".to_string()], vec![8]);
//! let prepared = client.translations().pre_translate(42, &request)?;
//!
//! assert_eq!(
//!     prepared.url.as_str(),
//!     "https://api.crowdin.com/api/v2/projects/42/pre-translations"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Sending the prepared request, authenticating it and retrying it are left
//! to the caller's HTTP stack.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod client;
pub mod config;
pub mod errors;
pub mod transport;
pub mod types;
pub mod validation;

// Services
pub mod services;

// Observability
pub mod observability;

// Testing utilities
pub mod fixtures;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::CrowdinClient;
pub use config::{CrowdinConfig, CrowdinConfigBuilder};
pub use errors::{CrowdinError, CrowdinResult, ValidationError};
pub use transport::TransportRequest;
pub use types::{join_int_slice, join_slice, ListOptions, QueryParams, QueryValues};
pub use validation::{validate_request, BuildProjectTranslationRequest, RequestValidator};

/// Default base URL for the Crowdin API
pub const DEFAULT_BASE_URL: &str = "https://api.crowdin.com/api/v2";

/// Host suffix used by Crowdin Enterprise organizations
pub const ENTERPRISE_HOST_SUFFIX: &str = "api.crowdin.com";

/// Create a client from environment variables
///
/// Reads:
/// - `CROWDIN_BASE_URL` - Override the API base URL
/// - `CROWDIN_ORGANIZATION` - Crowdin Enterprise organization name
pub fn create_client_from_env() -> CrowdinResult<CrowdinClient> {
    let config = CrowdinConfig::from_env()?;
    CrowdinClient::new(config)
}
