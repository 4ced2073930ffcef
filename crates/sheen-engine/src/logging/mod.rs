//! Logging utilities.
//!
//! Library code only talks to the `log` facade. Hosts that do not bring their
//! own logger call `init_logging` early to install `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig};
