use async_trait::async_trait;
use doh_fanout_domain::{DomainError, Hostname, RecordType};

/// A single DNS-over-HTTPS lookup for one hostname and one record type.
///
/// Returns the raw `data` strings of the matching answers, in upstream
/// order. Parsing them into addresses is the resolver's job so that one bad
/// literal does not discard the rest of the answer.
///
/// Implementations must report every failure as a `DomainError`; nothing on
/// this path may panic or exit the process.
#[async_trait]
pub trait DohClient: Send + Sync {
    async fn query(
        &self,
        hostname: &Hostname,
        record_type: RecordType,
    ) -> Result<Vec<String>, DomainError>;

    /// Endpoint used for logging.
    fn endpoint(&self) -> &str;
}
