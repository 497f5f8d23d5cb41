use doh_fanout_domain::Hostname;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// A pending lookup for one hostname.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: u64,
    pub hostname: Hostname,
}

/// Unbounded multi-consumer job queue.
///
/// The producer never waits, so enqueuing any number of hostnames cannot
/// deadlock against a small pool. Closing happens when the `JobSender` is
/// dropped; workers then drain what is left and see `None`.
pub fn job_queue() -> (JobSender, JobReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        JobSender { tx },
        JobReceiver {
            rx: Arc::new(Mutex::new(rx)),
        },
    )
}

pub struct JobSender {
    tx: mpsc::UnboundedSender<Job>,
}

impl JobSender {
    /// Returns the job back if every receiver is gone.
    pub fn enqueue(&self, job: Job) -> Result<(), Job> {
        self.tx.send(job).map_err(|e| e.0)
    }
}

#[derive(Clone)]
pub struct JobReceiver {
    rx: Arc<Mutex<mpsc::UnboundedReceiver<Job>>>,
}

impl JobReceiver {
    /// Next job, or `None` once the queue is closed and empty.
    pub async fn next(&self) -> Option<Job> {
        self.rx.lock().await.recv().await
    }
}
