//! Types shared across the Crowdin services.

mod common;
mod join;
mod job;
mod query;
mod text;

pub use common::*;
pub use join::*;
pub use job::*;
pub use query::*;
pub use text::*;
