use crate::completion::{CompletionSummary, CompletionTracker};
use crate::output_sink::OutputSinkJob;
use crate::queue::{job_queue, Job};
use crate::worker_pool::{WorkerPool, WorkerStats};
use crate::JobsError;
use doh_fanout_application::ports::ResultSink;
use doh_fanout_application::use_cases::ResolveHostnameUseCase;
use doh_fanout_domain::{DomainError, Hostname};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

const DEFAULT_OUTPUT_QUEUE_CAPACITY: usize = 1024;

/// Summary of one run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub jobs: usize,
    pub workers: usize,
    pub completions: CompletionSummary,
    pub records: usize,
    pub lines_written: usize,
    pub sink_error: Option<DomainError>,
}

/// Fans a hostname list out to a worker pool and waits for every job.
///
/// # Example
///
/// ```rust,ignore
/// let report = JobDistributor::new(resolver, 10)
///     .with_output_queue_capacity(1024)
///     .run(hostnames, Box::new(WriterSink::stdout()))
///     .await?;
/// ```
pub struct JobDistributor {
    resolver: Arc<ResolveHostnameUseCase>,
    configured_workers: usize,
    output_queue_capacity: usize,
}

impl JobDistributor {
    pub fn new(resolver: Arc<ResolveHostnameUseCase>, configured_workers: usize) -> Self {
        Self {
            resolver,
            configured_workers,
            output_queue_capacity: DEFAULT_OUTPUT_QUEUE_CAPACITY,
        }
    }

    pub fn with_output_queue_capacity(mut self, capacity: usize) -> Self {
        self.output_queue_capacity = capacity.max(1);
        self
    }

    /// Workers to start for `job_count` jobs: never more than there are
    /// jobs, never fewer than one while there is work.
    pub fn pool_size(configured_workers: usize, job_count: usize) -> usize {
        configured_workers.max(1).min(job_count)
    }

    /// Resolve every hostname exactly once, writing results to `sink`.
    ///
    /// Returns only after every job has signalled completion, the workers
    /// have exited and the sink has drained.
    pub async fn run(
        &self,
        hostnames: Vec<Hostname>,
        sink: Box<dyn ResultSink>,
    ) -> Result<RunReport, JobsError> {
        let total = hostnames.len();
        let pool_size = Self::pool_size(self.configured_workers, total);

        if total == 0 {
            info!("No hostnames to resolve");
            return Ok(RunReport::default());
        }

        info!(jobs = total, workers = pool_size, "Distributing jobs");

        let (line_tx, line_rx) = mpsc::channel(self.output_queue_capacity);
        let sink_handle = OutputSinkJob::new(sink).start(line_rx);

        let (job_tx, job_rx) = job_queue();
        let tracker = CompletionTracker::new(total);

        let pool = WorkerPool::new(Arc::clone(&self.resolver), pool_size);
        let workers = pool.spawn(job_rx, line_tx, tracker.sender());

        for (id, hostname) in hostnames.into_iter().enumerate() {
            if let Err(job) = job_tx.enqueue(Job {
                id: id as u64,
                hostname,
            }) {
                // Every worker is gone; the tracker reports the shortfall below.
                warn!(job_id = job.id, "Job queue closed before enqueue");
                break;
            }
        }
        drop(job_tx);

        let completions = tracker.wait_all().await;

        let mut totals = WorkerStats::default();
        for handle in workers {
            match handle.await {
                Ok(stats) => {
                    totals.jobs += stats.jobs;
                    totals.records += stats.records;
                    totals.lines_sent += stats.lines_sent;
                }
                Err(e) => warn!(error = %e, "Worker task failed"),
            }
        }

        let sink_report = sink_handle.await.map_err(|e| JobsError::SinkTask(e.to_string()))?;
        let completions = completions?;

        let report = RunReport {
            jobs: total,
            workers: pool_size,
            records: totals.records,
            lines_written: sink_report.lines_written,
            sink_error: sink_report.error,
            completions,
        };

        info!(
            jobs = report.jobs,
            workers = report.workers,
            records = report.records,
            lines = report.lines_written,
            with_errors = report.completions.with_errors(),
            "All jobs completed"
        );

        Ok(report)
    }
}
