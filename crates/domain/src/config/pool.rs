use serde::{Deserialize, Serialize};

/// Worker pool configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PoolConfig {
    /// Workers to start when none are given on the command line (default: 10).
    /// The pool never grows past the number of hostnames.
    #[serde(default = "default_workers")]
    pub default_workers: usize,

    /// Lines buffered between the workers and the output sink (default: 1024)
    #[serde(default = "default_output_queue_capacity")]
    pub output_queue_capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            default_workers: default_workers(),
            output_queue_capacity: default_output_queue_capacity(),
        }
    }
}

fn default_workers() -> usize {
    10
}

fn default_output_queue_capacity() -> usize {
    1024
}
