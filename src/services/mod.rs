//! Service implementations for Crowdin API endpoints.
//!
//! Each service prepares requests for one group of endpoints.

pub mod source_strings;
pub mod translations;

pub use source_strings::SourceStringsService;
pub use translations::TranslationsService;
