use thiserror::Error;

/// Errors raised while resolving a single hostname.
///
/// Every variant is recoverable: a worker logs it, attaches it to the
/// hostname's result and moves on to the next job.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Query timeout after {0}ms")]
    QueryTimeout(u64),

    #[error("Upstream returned HTTP {status}: {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Upstream DNS status {0}")]
    UpstreamStatus(u16),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// True for failures of the HTTP exchange itself, as opposed to a
    /// response that arrived but could not be used.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::Transport(_) | DomainError::QueryTimeout(_) | DomainError::HttpStatus { .. }
        )
    }
}
