use crate::completion::{CompletionSender, JobOutcome};
use crate::queue::JobReceiver;
use doh_fanout_application::use_cases::{HostResolution, ResolveHostnameUseCase};
use doh_fanout_domain::{AddressRecord, OutputLine};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Per-worker counters, returned when the worker exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerStats {
    pub jobs: usize,
    pub records: usize,
    pub lines_sent: usize,
}

/// Fixed-size pool of resolver workers sharing one job queue.
///
/// Workers hold no state besides their counters; the only shared pieces are
/// the job queue, the output queue and the completion channel.
pub struct WorkerPool {
    resolver: Arc<ResolveHostnameUseCase>,
    size: usize,
}

impl WorkerPool {
    pub fn new(resolver: Arc<ResolveHostnameUseCase>, size: usize) -> Self {
        Self { resolver, size }
    }

    /// Start `size` workers. Each runs until the job queue is closed and
    /// drained.
    pub fn spawn(
        &self,
        jobs: JobReceiver,
        output: mpsc::Sender<OutputLine>,
        completions: CompletionSender,
    ) -> Vec<JoinHandle<WorkerStats>> {
        info!(workers = self.size, "Starting worker pool");

        (0..self.size)
            .map(|worker_id| {
                tokio::spawn(run_worker(
                    worker_id,
                    Arc::clone(&self.resolver),
                    jobs.clone(),
                    output.clone(),
                    completions.clone(),
                ))
            })
            .collect()
    }
}

async fn run_worker(
    worker_id: usize,
    resolver: Arc<ResolveHostnameUseCase>,
    jobs: JobReceiver,
    output: mpsc::Sender<OutputLine>,
    completions: CompletionSender,
) -> WorkerStats {
    let mut stats = WorkerStats::default();
    let mut output = Some(output);

    while let Some(job) = jobs.next().await {
        let guard = completions.guard(job.id);

        let result = AssertUnwindSafe(resolver.execute(&job.hostname))
            .catch_unwind()
            .await;

        let outcome = match result {
            Ok(resolution) => {
                stats.records += resolution.records.len();

                if let Some(tx) = output.as_ref() {
                    match emit(tx, &resolution.records).await {
                        Ok(sent) => stats.lines_sent += sent,
                        Err(sent) => {
                            stats.lines_sent += sent;
                            warn!(worker_id, "Output sink closed, discarding further results");
                            output = None;
                        }
                    }
                }

                outcome_of(&resolution)
            }
            Err(panic) => {
                error!(
                    worker_id,
                    job_id = job.id,
                    hostname = %job.hostname,
                    panic = %panic_message(panic.as_ref()),
                    "Resolver panicked"
                );
                JobOutcome::Panicked
            }
        };

        stats.jobs += 1;
        guard.complete(outcome);
    }

    debug!(worker_id, jobs = stats.jobs, "Worker exiting, job queue closed");
    stats
}

/// Queue one line per record. On a closed sink, returns how many made it.
async fn emit(tx: &mpsc::Sender<OutputLine>, records: &[AddressRecord]) -> Result<usize, usize> {
    for (sent, record) in records.iter().enumerate() {
        if tx.send(OutputLine::from(record)).await.is_err() {
            return Err(sent);
        }
    }
    Ok(records.len())
}

fn outcome_of(resolution: &HostResolution) -> JobOutcome {
    match (resolution.records.is_empty(), resolution.errors.is_empty()) {
        (_, true) => JobOutcome::Resolved,
        (false, false) => JobOutcome::Partial,
        (true, false) => JobOutcome::Failed,
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
