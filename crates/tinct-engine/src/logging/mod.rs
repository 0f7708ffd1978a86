//! Logging utilities.
//!
//! This module centralizes logger initialization. Library code only talks to
//! the `log` facade; binaries pick the backend by calling [`init_logging`].

mod init;

pub use env_logger::WriteStyle;
pub use init::{LoggingConfig, init_logging};
