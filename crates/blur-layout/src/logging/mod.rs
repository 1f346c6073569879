//! Logging setup for hosts and demos that do not bring their own logger.
//!
//! The library itself only talks to the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
