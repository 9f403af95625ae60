//! Observability for the Crowdin client.
//!
//! Service methods emit `tracing` spans and debug events as they validate
//! and prepare requests. Install a subscriber with [`LoggingConfig::init`]
//! or bring your own.
//!
//! ```rust,no_run
//! use crowdin_client::observability::{LogFormat, LogLevel, LoggingConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! LoggingConfig::new()
//!     .with_level(LogLevel::Debug)
//!     .with_format(LogFormat::Json)
//!     .init()?;
//! # Ok(())
//! # }
//! ```

mod logging;

pub(crate) use logging::prepared;
pub use logging::{log_prepared_request, LogFormat, LogLevel, LoggingConfig};
