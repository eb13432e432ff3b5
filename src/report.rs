//! Human-readable report, one block per policy.

use std::{fmt, io};

use crate::error::Result;
use crate::scheduler::Policy;
use crate::sim::{PolicyReport, Results};

impl fmt::Display for Results {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average Turnaround: {:.6}", self.mean_turnaround)?;
        writeln!(f, "Average Normalized Turnaround: {:.6}", self.mean_norm_turnaround)?;
        writeln!(f, "Average Latency: {:.6}", self.mean_latency)?;
        writeln!(f, "Utilization: {:.6}", self.utilization)
    }
}

impl fmt::Display for PolicyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- {} stats -----", self.policy)?;
        write!(f, "{}", self.results)?;
        if let Some(quantum) = self.params.rr_quantum {
            writeln!(f, "Quantum: {quantum}")?;
        }
        if let Some(period) = self.params.mfq_reset_period {
            writeln!(f, "Priority Reset Period: {period}")?;
        }
        writeln!(
            f,
            "Elapsed Ticks: {} ({} busy, {} dispatches)",
            self.final_clock, self.busy_ticks, self.dispatches
        )
    }
}

pub fn write_report<W: io::Write>(
    out: &mut W,
    runs: &[(Policy, Result<PolicyReport>)],
) -> io::Result<()> {
    for (policy, run) in runs {
        match run {
            Ok(report) => write!(out, "{report}")?,
            Err(err) => writeln!(out, "----- {policy} failed: {err} -----")?,
        }
        writeln!(out, "===== finished {policy} =====")?;
        writeln!(out)?;
    }
    Ok(())
}
