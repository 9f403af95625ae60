//! Error types for the Crowdin client.
//!
//! Everything this crate can fail on happens before a request leaves the
//! process: bad configuration, a request that breaks one of the API's
//! field rules, or a body that cannot be turned into JSON.

use thiserror::Error;

/// Result type for Crowdin operations
pub type CrowdinResult<T> = Result<T, CrowdinError>;

/// Root error type for the Crowdin integration
#[derive(Error, Debug)]
pub enum CrowdinError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Request validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Request body or URL could not be produced
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
    },
}

impl CrowdinError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "CROWDIN_CONFIG",
            Self::Validation(_) => "CROWDIN_VALIDATION",
            Self::Serialization { .. } => "CROWDIN_SERIALIZATION",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Get the validation error, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CrowdinError {
    fn from(err: serde_json::Error) -> Self {
        CrowdinError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for CrowdinError {
    fn from(err: url::ParseError) -> Self {
        CrowdinError::Serialization {
            message: format!("Invalid URL: {}", err),
        }
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Base URL could not be parsed or uses an unsupported scheme
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Organization name is not a valid host label
    #[error("Invalid organization: {0}")]
    InvalidOrganization(String),
}

/// Request validation errors
///
/// Messages name the wire field that broke the rule, so they can be shown
/// to a user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No request was supplied
    #[error("request cannot be nil")]
    MissingRequest,

    /// A required field is zero or empty
    #[error("{field} is required")]
    Required {
        /// Wire name of the field
        field: &'static str,
    },

    /// A field is present but holds nothing
    #[error("{field} cannot be empty")]
    Empty {
        /// Wire name of the field
        field: &'static str,
    },

    /// A field holds a value of the wrong shape
    #[error("{field} must be {expected}")]
    InvalidType {
        /// Wire name of the field
        field: &'static str,
        /// Description of the accepted shapes
        expected: &'static str,
    },

    /// Two flags that exclude each other are both enabled
    #[error("{first} and {second} must not be true at the same request")]
    ConflictingFlags {
        /// First flag
        first: &'static str,
        /// Second flag
        second: &'static str,
    },

    /// Two fields that exclude each other are both set
    #[error("{first} and {second} can not be used at the same request")]
    ConflictingFields {
        /// First field
        first: &'static str,
        /// Second field
        second: &'static str,
    },

    /// A numeric field is outside its accepted range
    #[error("{field} must be from {min} to {max}")]
    OutOfRange {
        /// Wire name of the field
        field: &'static str,
        /// Inclusive lower bound
        min: i64,
        /// Inclusive upper bound
        max: i64,
        /// The rejected value
        value: i64,
    },
}

impl ValidationError {
    /// Wire name of the field at fault, if the error concerns one field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingRequest => None,
            Self::Required { field }
            | Self::Empty { field }
            | Self::InvalidType { field, .. }
            | Self::OutOfRange { field, .. } => Some(*field),
            Self::ConflictingFlags { first, .. } | Self::ConflictingFields { first, .. } => {
                Some(*first)
            }
        }
    }
}
