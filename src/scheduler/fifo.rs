use std::collections::VecDeque;

use rand::RngCore;

use super::{Policy, ProcessId, SchedEvent, SchedParams, Scheduler, SimCtx, Ticks};
use crate::error::Result;

/// Runs processes to completion in order of arrival.
pub struct FifoScheduler {
    order: VecDeque<ProcessId>,
}

impl Scheduler for FifoScheduler {
    const POLICY: Policy = Policy::Fifo;

    fn init(ctx: &mut SimCtx, _params: &SchedParams, _rng: &mut dyn RngCore) -> Result<Self> {
        let order = super::static_order(ctx, |process| process.arrival_time);
        Ok(Self { order: order.into() })
    }

    // The head stays selected until it completes, so an unarrived head idles the CPU
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
        debug_assert!(completed, "FIFO never preempts process {pid}");
        let head = self.order.pop_front();
        debug_assert_eq!(head, Some(pid), "Completed process {pid} was not the queue head");
        None
    }
}
