//! Labsite Core - Common infrastructure for the lab website data engines
//!
//! This crate provides the pieces every data domain shares: fetching a
//! backing JSON document over HTTP or from disk, the load error type,
//! logging setup and the loading spinner.

pub mod error;
pub mod fetch;
pub mod logging;
pub mod progress;

// Re-exports for convenience
pub use error::LoadError;
pub use fetch::{
    DocumentSource, FetchConfig, SHARED_RUNTIME, fetch_config, fetch_document, http_client,
    set_fetch_config,
};
pub use logging::{IndicatifLogger, Verbosity, init_logging};
pub use progress::{ProgressContext, SharedProgress};
