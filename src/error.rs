//! Error types for simulation runs

use crate::core::{ProcessId, Ticks};
use crate::scheduler::Policy;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("Invalid workload size {0}: expected a positive number of processes")]
    InvalidWorkloadSize(i64),

    #[error("Workload is empty; at least one process is required")]
    EmptyWorkload,

    #[error("Process {pid} has a zero burst time")]
    ZeroBurst { pid: ProcessId },

    #[error("Invalid {what} range {start}..={end}")]
    InvalidRange {
        what: &'static str,
        start: Ticks,
        end: Ticks,
    },

    #[error("Invalid quantum {0}: must be non-zero")]
    InvalidQuantum(Ticks),

    #[error("Invalid priority reset period {0}: must be non-zero")]
    InvalidResetPeriod(Ticks),

    #[error("{policy} made no progress at tick {clock}")]
    Stalled { policy: Policy, clock: Ticks },

    #[error("Process {pid} has not finished")]
    Unfinished { pid: ProcessId },
}

pub type Result<T> = std::result::Result<T, SimError>;
