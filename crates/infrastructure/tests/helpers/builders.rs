#![allow(dead_code)]
use doh_fanout_infrastructure::dns::JsonDohClient;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

/// Builder for JSON DoH clients pointed at test endpoints
pub struct DohClientBuilder;

impl DohClientBuilder {
    /// Client with a generous deadline for a local mock server
    pub fn local(url: &str) -> JsonDohClient {
        JsonDohClient::new(url, Duration::from_secs(5))
    }

    /// Client with a short deadline, for timeout tests
    pub fn impatient(url: &str) -> JsonDohClient {
        JsonDohClient::new(url, Duration::from_millis(200))
    }

    /// A URL on a port nothing listens on
    pub fn unreachable_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}/resolve", port)
    }
}

/// Builder for hostname list files
pub struct HostlistBuilder;

impl HostlistBuilder {
    pub fn with_contents(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    pub fn with_bytes(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }
}
