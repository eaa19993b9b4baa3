//! Logger setup for binaries.
//!
//! Libraries log through the `log` facade only.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
