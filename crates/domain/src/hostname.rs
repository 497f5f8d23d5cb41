use std::fmt;
use std::sync::Arc;

/// A hostname to resolve. Opaque: no syntax checks beyond being non-blank,
/// the upstream resolver is the judge of what resolves.
///
/// Uses `Arc<str>` so the same name can be cloned into both DoH queries and
/// every output line without copying.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hostname(Arc<str>);

impl Hostname {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Parse one line of a hostname list. Surrounding whitespace is
    /// trimmed; blank lines yield `None`.
    pub fn from_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(Arc::from(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
