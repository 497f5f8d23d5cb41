use super::TransportResponse;
use doh_fanout_domain::DomainError;
use std::time::Duration;
use tracing::debug;

/// Content type of the JSON flavour of DNS-over-HTTPS
const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// DNS-over-HTTPS transport for the JSON API (GET with query parameters).
///
/// Holds one pooled `reqwest::Client`; clones of the transport share its
/// connections, so every worker reuses the same keep-alive pool.
#[derive(Clone)]
pub struct HttpsTransport {
    url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpsTransport {
    pub fn new(url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(32)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            url,
            client,
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one GET and return the body of a 2xx response.
    pub async fn get(&self, params: &[(&str, String)]) -> Result<TransportResponse, DomainError> {
        debug!(url = %self.url, ?params, "Sending DoH query");

        let timeout_ms = self.timeout.as_millis() as u64;

        let response = tokio::time::timeout(
            self.timeout,
            self.client
                .get(&self.url)
                .header("Accept", DNS_JSON_CONTENT_TYPE)
                .query(params)
                .send(),
        )
        .await
        .map_err(|_| DomainError::QueryTimeout(timeout_ms))?
        .map_err(|e| Self::map_error(&self.url, timeout_ms, e))?;

        // Check HTTP status
        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let protocol_used = match response.version() {
            reqwest::Version::HTTP_2 => "HTTP/2",
            reqwest::Version::HTTP_3 => "HTTP/3",
            _ => "HTTP/1.1",
        };

        let body = tokio::time::timeout(self.timeout, response.bytes())
            .await
            .map_err(|_| DomainError::QueryTimeout(timeout_ms))?
            .map_err(|e| Self::map_error(&self.url, timeout_ms, e))?;

        debug!(
            url = %self.url,
            response_len = body.len(),
            protocol = protocol_used,
            "DoH response received"
        );

        Ok(TransportResponse {
            bytes: body.to_vec(),
            protocol_used,
        })
    }

    fn map_error(url: &str, timeout_ms: u64, error: reqwest::Error) -> DomainError {
        if error.is_timeout() {
            DomainError::QueryTimeout(timeout_ms)
        } else {
            DomainError::Transport(format!("DoH request to {} failed: {}", url, error))
        }
    }
}
