//! DoH JSON Query Builder
//!
//! Builds the query string of a JSON DoH GET request:
//! `name=<hostname>&type=A|AAAA&do=0`.

use doh_fanout_domain::{DomainError, Hostname, RecordType};

/// Builds DoH JSON query parameters
pub struct QueryBuilder;

impl QueryBuilder {
    /// Query parameters for one lookup.
    ///
    /// `do=0` asks the resolver to leave DNSSEC records out of the answer.
    /// Percent-encoding is left to the HTTP client.
    pub fn build_query(
        hostname: &Hostname,
        record_type: RecordType,
    ) -> Result<[(&'static str, String); 3], DomainError> {
        let name = hostname.as_str();
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(DomainError::InvalidHostname(format!(
                "hostname contains whitespace or control characters: {:?}",
                name
            )));
        }

        Ok([
            ("name", name.to_string()),
            ("type", record_type.as_str().to_string()),
            ("do", "0".to_string()),
        ])
    }
}
