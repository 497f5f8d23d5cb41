use serde::{Deserialize, Serialize};

/// Result output configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// File to write result lines to; standard output when unset.
    /// An existing file is truncated.
    #[serde(default)]
    pub path: Option<String>,
}
