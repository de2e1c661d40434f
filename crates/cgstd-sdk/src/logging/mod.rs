//! Logging utilities.
//!
//! Libraries in this workspace only use the `log` facade; binaries call
//! [`init_logging`] once to install the `env_logger` backend.

mod init;

pub use init::{init_logging, LoggingConfig};
