//! Source strings service for the Crowdin API.
//!
//! Listing, adding and deleting strings, plus bulk upload of strings from
//! a stored file.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
