use async_trait::async_trait;
use doh_fanout_domain::{DomainError, OutputLine};

/// Destination for result lines.
///
/// Owned by exactly one consumer task, hence `&mut self`: implementations
/// need no internal locking. `write_line` must emit the line and its
/// newline as one unit.
#[async_trait]
pub trait ResultSink: Send {
    async fn write_line(&mut self, line: &OutputLine) -> Result<(), DomainError>;

    async fn flush(&mut self) -> Result<(), DomainError>;
}
