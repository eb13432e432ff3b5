use rand::{Rng, RngCore};

use super::{
    MFQ_QUANTA, MFQ_RESET_RANGE, Policy, ProcessId, SchedEvent, SchedParams, Scheduler, SimCtx,
    Ticks,
};
use crate::core::{Priority, TOP_PRIORITY};
use crate::error::{Result, SimError};

pub const LOWEST_PRIORITY: Priority = MFQ_QUANTA.len();

/// Multi-level feedback queue with four bands.
///
/// Every process enters at priority 1. A process that uses up its band's
/// quantum without finishing drops one band (the last band keeps it). Each
/// time the clock passes a multiple of the reset period, every process is
/// moved back to priority 1 so nothing starves in the low bands.
///
/// Candidate selection is the same cyclic walk over the workload that round
/// robin uses; the band only decides how long a process may run.
pub struct MfqScheduler {
    reset_period: Ticks,
    next_reset: Ticks,
    cursor: usize,
}

impl MfqScheduler {
    pub fn with_reset_period(reset_period: Ticks) -> Result<Self> {
        if reset_period == 0 {
            return Err(SimError::InvalidResetPeriod(reset_period));
        }
        Ok(Self {
            reset_period,
            next_reset: reset_period,
            cursor: 0,
        })
    }

    pub fn quantum_for(priority: Priority) -> Ticks {
        let band = priority.clamp(TOP_PRIORITY, LOWEST_PRIORITY) - TOP_PRIORITY;
        MFQ_QUANTA[band]
    }
}

impl Scheduler for MfqScheduler {
    const POLICY: Policy = Policy::Mfq;

    fn init(ctx: &mut SimCtx, params: &SchedParams, rng: &mut dyn RngCore) -> Result<Self> {
        for process in ctx.processes.iter_mut() {
            process.priority = TOP_PRIORITY;
        }

        let reset_period = match params.mfq_reset_period {
            Some(period) => period,
            None => rng.random_range(MFQ_RESET_RANGE),
        };
        Self::with_reset_period(reset_period)
    }

    fn begin_round(&mut self, ctx: &mut SimCtx) -> Option<SchedEvent> {
        if ctx.now < self.next_reset {
            return None;
        }

        // A long slice may have carried the clock past several periods
        while self.next_reset <= ctx.now {
            self.next_reset = self.next_reset.saturating_add(self.reset_period);
        }

        let mut promoted = 0;
        for process in ctx.processes.iter_mut() {
            if process.priority != TOP_PRIORITY {
                process.priority = TOP_PRIORITY;
                promoted += 1;
            }
        }
        Some(SchedEvent::PriorityReset {
            processes: promoted,
        })
    }

    fn select(&mut self, ctx: &SimCtx) -> Option<ProcessId> {
        let pid = self.cursor % ctx.len();
        self.cursor = self.cursor.wrapping_add(1);
        Some(pid)
    }

    fn slice(&self, ctx: &SimCtx, pid: ProcessId) -> Option<Ticks> {
        Some(Self::quantum_for(ctx.process(pid).priority))
    }

    fn stopping(
        &mut self,
        ctx: &mut SimCtx,
        pid: ProcessId,
        completed: bool,
    ) -> Option<SchedEvent> {
        if completed {
            return None;
        }

        let process = ctx.process_mut(pid);
        let from = process.priority;
        if from >= LOWEST_PRIORITY {
            return None;
        }
        process.priority = from + 1;
        Some(SchedEvent::Demote {
            pid,
            from,
            to: process.priority,
        })
    }

    fn params(&self) -> SchedParams {
        SchedParams {
            mfq_reset_period: Some(self.reset_period),
            ..SchedParams::default()
        }
    }
}
