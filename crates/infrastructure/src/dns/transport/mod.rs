pub mod https;

pub use https::HttpsTransport;

/// Result of a raw DoH exchange
#[derive(Debug)]
pub struct TransportResponse {
    /// Response body (JSON, undecoded)
    pub bytes: Vec<u8>,
    /// HTTP version negotiated with the endpoint
    pub protocol_used: &'static str,
}
