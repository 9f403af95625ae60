//! Translations service for the Crowdin API.
//!
//! Pre-translation, project/directory/file builds, translation upload and
//! export.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
