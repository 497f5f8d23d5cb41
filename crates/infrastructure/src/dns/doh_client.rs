use super::forwarding::{QueryBuilder, ResponseParser};
use super::transport::HttpsTransport;
use async_trait::async_trait;
use doh_fanout_application::ports::DohClient;
use doh_fanout_domain::config::UpstreamConfig;
use doh_fanout_domain::{DomainError, Hostname, RecordType};
use std::time::Duration;
use tracing::debug;

/// `DohClient` backed by a JSON DoH endpoint such as
/// `https://dns.google/resolve`.
///
/// Stateless apart from the pooled HTTP client; safe to share between all
/// workers behind one `Arc`.
#[derive(Clone)]
pub struct JsonDohClient {
    transport: HttpsTransport,
}

impl JsonDohClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            transport: HttpsTransport::new(url.into(), timeout),
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self::new(
            config.url.clone(),
            Duration::from_millis(config.timeout_ms),
        )
    }
}

#[async_trait]
impl DohClient for JsonDohClient {
    async fn query(
        &self,
        hostname: &Hostname,
        record_type: RecordType,
    ) -> Result<Vec<String>, DomainError> {
        let params = QueryBuilder::build_query(hostname, record_type)?;
        let response = self.transport.get(&params).await?;
        let data = ResponseParser::parse(&response.bytes, record_type)?;

        debug!(
            hostname = %hostname,
            record_type = %record_type,
            protocol = response.protocol_used,
            answers = data.len(),
            "DoH query completed"
        );

        Ok(data)
    }

    fn endpoint(&self) -> &str {
        self.transport.url()
    }
}
