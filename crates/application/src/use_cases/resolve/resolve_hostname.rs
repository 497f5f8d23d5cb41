use crate::ports::DohClient;
use doh_fanout_domain::{AddressRecord, DomainError, Hostname, RecordType};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Outcome of resolving one hostname: every usable address plus every
/// error hit along the way. Both may be non-empty at once.
#[derive(Debug, Clone)]
pub struct HostResolution {
    pub hostname: Hostname,
    /// IPv4 records in upstream order, then IPv6 records in upstream order.
    pub records: Vec<AddressRecord>,
    pub errors: Vec<DomainError>,
}

impl HostResolution {
    pub fn empty(hostname: Hostname) -> Self {
        Self {
            hostname,
            records: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Use case: resolve A and AAAA for one hostname.
///
/// Both lookups are in flight at the same time and joined before merging.
pub struct ResolveHostnameUseCase {
    client: Arc<dyn DohClient>,
}

impl ResolveHostnameUseCase {
    pub fn new(client: Arc<dyn DohClient>) -> Self {
        Self { client }
    }

    #[instrument(skip_all, fields(hostname = %hostname))]
    pub async fn execute(&self, hostname: &Hostname) -> HostResolution {
        let (v4, v6) = tokio::join!(
            self.client.query(hostname, RecordType::A),
            self.client.query(hostname, RecordType::AAAA),
        );

        let mut resolution = HostResolution::empty(hostname.clone());
        Self::merge(&mut resolution, RecordType::A, v4);
        Self::merge(&mut resolution, RecordType::AAAA, v6);

        debug!(
            records = resolution.records.len(),
            errors = resolution.errors.len(),
            "Hostname resolved"
        );

        resolution
    }

    fn merge(
        resolution: &mut HostResolution,
        record_type: RecordType,
        answer: Result<Vec<String>, DomainError>,
    ) {
        let data = match answer {
            Ok(data) => data,
            Err(e) => {
                warn!(
                    hostname = %resolution.hostname,
                    record_type = %record_type,
                    error = %e,
                    "DoH query failed"
                );
                resolution.errors.push(e);
                return;
            }
        };

        for item in data {
            match AddressRecord::parse(&resolution.hostname, record_type, &item) {
                Ok(record) => resolution.records.push(record),
                Err(e) => {
                    warn!(error = %e, "Dropping unusable answer");
                    resolution.errors.push(e);
                }
            }
        }
    }
}
