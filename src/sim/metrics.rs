use average::{Estimate, Mean};

use crate::core::{Process, RunOutcome, Ticks};
use crate::error::{Result, SimError};
use crate::scheduler::{Policy, SchedParams};

/// Aggregate statistics for one policy run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Results {
    pub mean_turnaround: f64,
    pub mean_norm_turnaround: f64,
    pub mean_latency: f64,
    pub utilization: f64,
}

impl Results {
    /// Reduces a finished process set. Utilization is the run-level ratio of
    /// busy ticks to elapsed ticks, not a per-process average.
    pub fn aggregate(
        processes: &[Process],
        busy_ticks: Ticks,
        final_clock: Ticks,
    ) -> Result<Self> {
        if processes.is_empty() {
            return Err(SimError::EmptyWorkload);
        }
        if let Some(process) = processes.iter().find(|process| !process.done) {
            return Err(SimError::Unfinished { pid: process.name });
        }

        let utilization = if final_clock == 0 {
            0.0
        } else {
            busy_ticks as f64 / final_clock as f64
        };

        Ok(Self {
            mean_turnaround: avg(processes.iter().map(|p| p.turnaround as f64)),
            mean_norm_turnaround: avg(processes.iter().map(|p| p.norm_turnaround)),
            mean_latency: avg(processes.iter().map(|p| p.latency as f64)),
            utilization,
        })
    }
}

/// One policy's results plus the run-level figures behind them.
#[derive(Debug, Clone)]
pub struct PolicyReport {
    pub policy: Policy,
    pub results: Results,
    pub final_clock: Ticks,
    pub busy_ticks: Ticks,
    pub dispatches: u64,
    pub preemptions: u64,
    pub params: SchedParams,
    pub processes: Vec<Process>,
}

impl PolicyReport {
    pub fn from_outcome(policy: Policy, outcome: RunOutcome) -> Result<Self> {
        let results =
            Results::aggregate(&outcome.processes, outcome.busy_ticks, outcome.final_clock)?;
        Ok(Self {
            policy,
            results,
            final_clock: outcome.final_clock,
            busy_ticks: outcome.busy_ticks,
            dispatches: outcome.dispatches,
            preemptions: outcome.preemptions,
            params: outcome.params,
            processes: outcome.processes,
        })
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}
