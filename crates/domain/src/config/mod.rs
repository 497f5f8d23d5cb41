//! Configuration module for doh-fanout
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `upstream`: DoH endpoint and request deadline
//! - `pool`: Worker pool sizing and output queue capacity
//! - `output`: Where result lines are written
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod output;
pub mod pool;
pub mod root;
pub mod upstream;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use pool::PoolConfig;
pub use root::{CliOverrides, Config};
pub use upstream::UpstreamConfig;
