use crate::JobsError;
use tokio::sync::mpsc;
use tracing::debug;

/// How a job ended. Every job ends in exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    /// Both lookups succeeded (possibly with zero addresses)
    Resolved,
    /// Some addresses were produced, some lookups or answers failed
    Partial,
    /// Errors only, no addresses
    Failed,
    /// The resolver panicked; caught by the worker
    Panicked,
    /// The guard was dropped without an explicit outcome
    Abandoned,
}

/// One per job, sent by the job's `CompletionGuard`.
#[derive(Debug, Clone, Copy)]
pub struct CompletionSignal {
    pub job_id: u64,
    pub outcome: JobOutcome,
}

/// Tally of received signals by outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSummary {
    pub resolved: usize,
    pub partial: usize,
    pub failed: usize,
    pub panicked: usize,
    pub abandoned: usize,
}

impl CompletionSummary {
    fn record(&mut self, outcome: JobOutcome) {
        match outcome {
            JobOutcome::Resolved => self.resolved += 1,
            JobOutcome::Partial => self.partial += 1,
            JobOutcome::Failed => self.failed += 1,
            JobOutcome::Panicked => self.panicked += 1,
            JobOutcome::Abandoned => self.abandoned += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.resolved + self.partial + self.failed + self.panicked + self.abandoned
    }

    /// Jobs that hit at least one error.
    pub fn with_errors(&self) -> usize {
        self.partial + self.failed + self.panicked + self.abandoned
    }
}

/// Counts completion signals for a known number of jobs.
///
/// Owned by the distributor. Workers get `CompletionSender`s; each job
/// takes a guard from one, and the guard signals on drop.
pub struct CompletionTracker {
    tx: mpsc::UnboundedSender<CompletionSignal>,
    rx: mpsc::UnboundedReceiver<CompletionSignal>,
    expected: usize,
}

impl CompletionTracker {
    pub fn new(expected: usize) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx, expected }
    }

    pub fn sender(&self) -> CompletionSender {
        CompletionSender {
            tx: self.tx.clone(),
        }
    }

    /// Wait until `expected` signals have arrived.
    ///
    /// Fails instead of waiting forever when every sender is gone before
    /// the count is reached.
    pub async fn wait_all(self) -> Result<CompletionSummary, JobsError> {
        let Self {
            tx,
            mut rx,
            expected,
        } = self;
        drop(tx);

        let mut summary = CompletionSummary::default();
        while summary.total() < expected {
            match rx.recv().await {
                Some(signal) => {
                    debug!(job_id = signal.job_id, outcome = ?signal.outcome, "Job completed");
                    summary.record(signal.outcome);
                }
                None => {
                    return Err(JobsError::MissingCompletions {
                        expected,
                        received: summary.total(),
                    });
                }
            }
        }

        Ok(summary)
    }
}

/// Handed to workers; mints one guard per job.
#[derive(Clone)]
pub struct CompletionSender {
    tx: mpsc::UnboundedSender<CompletionSignal>,
}

impl CompletionSender {
    pub fn guard(&self, job_id: u64) -> CompletionGuard {
        CompletionGuard {
            tx: self.tx.clone(),
            job_id,
            outcome: JobOutcome::Abandoned,
        }
    }
}

/// Sends the job's completion signal when dropped, on every path out of
/// the job (normal return, early return, unwinding).
pub struct CompletionGuard {
    tx: mpsc::UnboundedSender<CompletionSignal>,
    job_id: u64,
    outcome: JobOutcome,
}

impl CompletionGuard {
    pub fn complete(mut self, outcome: JobOutcome) {
        self.outcome = outcome;
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        // Receiver gone means the distributor stopped waiting; nothing to tell.
        let _ = self.tx.send(CompletionSignal {
            job_id: self.job_id,
            outcome: self.outcome,
        });
    }
}
