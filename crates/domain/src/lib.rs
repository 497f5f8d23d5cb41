//! doh-fanout Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod hostname;
pub mod output_line;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{AddressFamily, AddressRecord, RecordType};
pub use errors::DomainError;
pub use hostname::Hostname;
pub use output_line::OutputLine;
