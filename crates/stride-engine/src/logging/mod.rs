//! Logging setup.
//!
//! The engine itself only emits through the `log` facade; this module lets
//! binaries install `env_logger` as the backend.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
