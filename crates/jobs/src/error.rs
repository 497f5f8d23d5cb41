use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobsError {
    #[error("Only {received} of {expected} jobs signalled completion before all workers exited")]
    MissingCompletions { expected: usize, received: usize },

    #[error("Output sink task failed: {0}")]
    SinkTask(String),
}
