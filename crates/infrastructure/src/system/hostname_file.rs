use async_trait::async_trait;
use doh_fanout_application::ports::HostnameSource;
use doh_fanout_domain::{DomainError, Hostname};
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Newline-delimited UTF-8 hostname list on disk.
pub struct HostnameFile {
    path: PathBuf,
}

impl HostnameFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse list contents: one hostname per line, blank lines skipped,
    /// duplicates kept in place.
    pub fn parse(content: &str) -> Vec<Hostname> {
        content.lines().filter_map(Hostname::from_line).collect()
    }
}

#[async_trait]
impl HostnameSource for HostnameFile {
    async fn load(&self) -> Result<Vec<Hostname>, DomainError> {
        let bytes = fs::read(&self.path).await.map_err(|e| {
            DomainError::IoError(format!(
                "Failed to read hostname list {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let content = String::from_utf8(bytes).map_err(|e| {
            DomainError::IoError(format!(
                "Hostname list {} is not valid UTF-8: {}",
                self.path.display(),
                e
            ))
        })?;

        let hostnames = Self::parse(&content);
        debug!(
            path = %self.path.display(),
            lines = content.lines().count(),
            hostnames = hostnames.len(),
            "Hostname list parsed"
        );
        Ok(hostnames)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
