use async_trait::async_trait;
use doh_fanout_application::ports::ResultSink;
use doh_fanout_domain::{DomainError, OutputLine};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter, Stdout};

/// `ResultSink` over any async writer (stdout, a file, a pipe).
///
/// Each line goes out through a single `write_all` of the line plus its
/// newline, behind a `BufWriter`; a line is never split across writes of
/// different lines.
pub struct WriterSink<W: AsyncWrite + Unpin + Send> {
    writer: BufWriter<W>,
}

impl<W: AsyncWrite + Unpin + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl WriterSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl WriterSink<File> {
    /// Create (or truncate) `path` and write lines to it.
    pub async fn create(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let file = File::create(path).await.map_err(|e| {
            DomainError::IoError(format!("Failed to create {}: {}", path.display(), e))
        })?;
        Ok(Self::new(file))
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> ResultSink for WriterSink<W> {
    async fn write_line(&mut self, line: &OutputLine) -> Result<(), DomainError> {
        self.writer
            .write_all(&line.to_bytes_with_newline())
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to write result line: {}", e)))
    }

    async fn flush(&mut self) -> Result<(), DomainError> {
        self.writer
            .flush()
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to flush results: {}", e)))
    }
}
