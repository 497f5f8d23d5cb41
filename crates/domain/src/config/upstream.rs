use serde::{Deserialize, Serialize};

/// DoH upstream configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// JSON DoH endpoint (default: "https://dns.google/resolve")
    #[serde(default = "default_url")]
    pub url: String,

    /// Per-request deadline in milliseconds (default: 5000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_url() -> String {
    "https://dns.google/resolve".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}
