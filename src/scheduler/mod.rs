pub mod fifo;
pub mod mfq;
pub mod round_robin;
pub mod sjf;

use std::{fmt, ops::RangeInclusive};

use rand::RngCore;

use crate::core::{Process, ProcessId, SchedEvent, SimCtx, Ticks};
use crate::error::Result;
pub use fifo::FifoScheduler;
pub use mfq::MfqScheduler;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;

pub const RR_QUANTUM_RANGE: RangeInclusive<Ticks> = 1..=10;
pub const MFQ_QUANTA: [Ticks; 4] = [2, 4, 8, 16];
pub const MFQ_RESET_RANGE: RangeInclusive<Ticks> = 100..=500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Sjf,
    RoundRobin,
    Mfq,
}

impl Policy {
    pub const ALL: [Policy; 4] = [Policy::Fifo, Policy::Sjf, Policy::RoundRobin, Policy::Mfq];

    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Sjf => "SJF",
            Policy::RoundRobin => "Round Robin",
            Policy::Mfq => "MFQ",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run-level overrides for values a policy would otherwise draw at random.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedParams {
    pub rr_quantum: Option<Ticks>,
    pub mfq_reset_period: Option<Ticks>,
}

pub trait Scheduler: Sized {
    const POLICY: Policy;

    fn init(ctx: &mut SimCtx, params: &SchedParams, rng: &mut dyn RngCore) -> Result<Self>;

    // Called once per outer loop iteration, before select()
    fn begin_round(&mut self, _ctx: &mut SimCtx) -> Option<SchedEvent> {
        None
    }

    fn select(&mut self, ctx: &SimCtx) -> Option<ProcessId>;

    /// Ticks `pid` may run before it is preempted; `None` runs it to completion.
    fn slice(&self, ctx: &SimCtx, pid: ProcessId) -> Option<Ticks>;

    fn stopping(
        &mut self,
        _ctx: &mut SimCtx,
        _pid: ProcessId,
        _completed: bool,
    ) -> Option<SchedEvent> {
        None
    }

    // The run-level values actually in effect, random draws included
    fn params(&self) -> SchedParams {
        SchedParams::default()
    }
}

// Stable sort of every pid by `key`; ties keep workload order
fn static_order<K: Ord>(ctx: &SimCtx, key: impl Fn(&Process) -> K) -> Vec<ProcessId> {
    let mut order: Vec<ProcessId> = (0..ctx.len()).collect();
    order.sort_by_key(|&pid| key(ctx.process(pid)));
    order
}
