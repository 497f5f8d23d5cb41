use doh_fanout_application::ports::ResultSink;
use doh_fanout_domain::{DomainError, OutputLine};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// What the sink task did before its queue closed.
#[derive(Debug, Default)]
pub struct SinkReport {
    pub lines_written: usize,
    /// First write or flush failure; the sink stops at this point.
    pub error: Option<DomainError>,
}

/// Single consumer of the output queue.
///
/// Lines are written in the order they are drained. Stopping (queue closed
/// or write failure) drops the receiver, so producers see a closed channel
/// rather than blocking on a full one.
pub struct OutputSinkJob {
    sink: Box<dyn ResultSink>,
}

impl OutputSinkJob {
    pub fn new(sink: Box<dyn ResultSink>) -> Self {
        Self { sink }
    }

    pub fn start(self, mut lines: mpsc::Receiver<OutputLine>) -> JoinHandle<SinkReport> {
        let mut sink = self.sink;

        tokio::spawn(async move {
            let mut report = SinkReport::default();

            while let Some(line) = lines.recv().await {
                if let Err(e) = sink.write_line(&line).await {
                    error!(error = %e, written = report.lines_written, "Output sink write failed");
                    report.error = Some(e);
                    return report;
                }
                report.lines_written += 1;
            }

            if let Err(e) = sink.flush().await {
                error!(error = %e, "Output sink flush failed");
                report.error = Some(e);
            }

            debug!(lines = report.lines_written, "Output sink drained");
            report
        })
    }
}
