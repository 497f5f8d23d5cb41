use crate::ports::HostnameSource;
use doh_fanout_domain::{DomainError, Hostname};
use std::sync::Arc;
use tracing::{info, instrument};

/// Use case: read the hostname list once, in input order.
pub struct LoadHostnamesUseCase {
    source: Arc<dyn HostnameSource>,
}

impl LoadHostnamesUseCase {
    pub fn new(source: Arc<dyn HostnameSource>) -> Self {
        Self { source }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<Hostname>, DomainError> {
        let hostnames = self.source.load().await?;

        info!(
            source = %self.source.describe(),
            count = hostnames.len(),
            "Hostname list loaded"
        );

        Ok(hostnames)
    }
}
