use super::{event::SchedEvent, state::SimCtx};
use crate::core::Ticks;

#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
    dispatches: u64,
    preemptions: u64,
    idle_ticks: Ticks,
    // Full event trace, kept only when asked for
    trace: Option<Vec<(Ticks, SchedEvent)>>,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trace() -> Self {
        Self {
            trace: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn record(&mut self, now: Ticks, event: SchedEvent) {
        match event {
            SchedEvent::Idle { .. } => self.idle_ticks += 1,
            SchedEvent::Dispatch { .. } => self.dispatches += 1,
            SchedEvent::Preempt { .. } => self.preemptions += 1,
            _ => {}
        }

        if let Some(trace) = self.trace.as_mut() {
            trace.push((now, event));
        }
    }

    pub fn observe(&mut self, ctx: &SimCtx) {
        self.step += 1;

        debug_assert!(
            ctx.busy <= ctx.now,
            "Busy ticks {} exceed elapsed ticks {}",
            ctx.busy,
            ctx.now
        );

        for process in &ctx.processes {
            let pid = process.name;
            debug_assert!(
                process.amount_done <= process.burst_time,
                "Process {pid} overran its burst: {} > {}",
                process.amount_done,
                process.burst_time
            );
            if process.done {
                debug_assert_eq!(
                    process.amount_done, process.burst_time,
                    "Completed process {pid} has outstanding work"
                );
                debug_assert!(
                    process.finish_time.is_some(),
                    "Completed process {pid} has no finish time"
                );
            }
            if let Some(start) = process.start_time {
                debug_assert!(
                    start >= process.arrival_time,
                    "Process {pid} dispatched at {start} before arriving at {}",
                    process.arrival_time
                );
            }
        }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn dispatches(&self) -> u64 {
        self.dispatches
    }

    pub fn preemptions(&self) -> u64 {
        self.preemptions
    }

    pub fn idle_ticks(&self) -> Ticks {
        self.idle_ticks
    }

    pub fn into_trace(self) -> Option<Vec<(Ticks, SchedEvent)>> {
        self.trace
    }
}
