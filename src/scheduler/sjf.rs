use std::collections::VecDeque;

use rand::RngCore;

use super::{Policy, ProcessId, SchedEvent, SchedParams, Scheduler, SimCtx, Ticks};
use crate::error::Result;

/// Non-preemptive shortest job first.
///
/// The order is decided once, by burst length, when the run starts. Later
/// arrivals do not cause a re-sort, so a short job that arrives late still
/// holds the CPU idle ahead of longer jobs that are already waiting.
pub struct SjfScheduler {
    order: VecDeque<ProcessId>,
}

impl Scheduler for SjfScheduler {
    const POLICY: Policy = Policy::Sjf;

    fn init(ctx: &mut SimCtx, _params: &SchedParams, _rng: &mut dyn RngCore) -> Result<Self> {
        let order = super::static_order(ctx, |process| process.burst_time);
        Ok(Self { order: order.into() })
    }

    fn select(&mut self, _ctx: &SimCtx) -> Option<ProcessId> {
        self.order.front().copied()
    }

    fn slice(&self, _ctx: &SimCtx, _pid: ProcessId) -> Option<Ticks> {
        None
    }

    fn stopping(
        &mut self,
        _ctx: &mut SimCtx,
        pid: ProcessId,
        completed: bool,
    ) -> Option<SchedEvent> {
        debug_assert!(completed, "SJF never preempts process {pid}");
        let head = self.order.pop_front();
        debug_assert_eq!(head, Some(pid), "Completed process {pid} was not the queue head");
        None
    }
}
