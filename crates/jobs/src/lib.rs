//! Job distribution engine: a fixed worker pool fed by an unbounded job
//! queue, per-job completion guards, and a single output sink task.
pub mod completion;
pub mod distributor;
pub mod error;
pub mod output_sink;
pub mod queue;
pub mod worker_pool;

pub use completion::{CompletionSummary, CompletionTracker, JobOutcome};
pub use distributor::{JobDistributor, RunReport};
pub use error::JobsError;
pub use output_sink::{OutputSinkJob, SinkReport};
pub use queue::{job_queue, Job};
pub use worker_pool::{WorkerPool, WorkerStats};
