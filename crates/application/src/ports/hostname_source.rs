use async_trait::async_trait;
use doh_fanout_domain::{DomainError, Hostname};

/// Line-oriented source of hostnames, read once per run.
#[async_trait]
pub trait HostnameSource: Send + Sync {
    /// Every hostname in input order. Duplicates are kept.
    async fn load(&self) -> Result<Vec<Hostname>, DomainError>;

    fn describe(&self) -> String;
}
