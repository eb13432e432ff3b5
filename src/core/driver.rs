use log::{debug, trace};
use rand::RngCore;

use super::{
    event::SchedEvent,
    observer::Observer,
    state::{Process, ProcessId, SimCtx, Ticks},
};
use crate::error::{Result, SimError};
use crate::scheduler::{SchedParams, Scheduler};

pub struct SchedCore<S: Scheduler> {
    pub ctx: SimCtx,
    pub scheduler: S,
    observer: Observer,
    // Consecutive selections that landed on an already finished process
    skipped: usize,
}

/// Everything a finished run leaves behind.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub processes: Vec<Process>,
    pub final_clock: Ticks,
    pub busy_ticks: Ticks,
    pub dispatches: u64,
    pub preemptions: u64,
    pub idle_ticks: Ticks,
    pub params: SchedParams,
    pub trace: Option<Vec<(Ticks, SchedEvent)>>,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(
        processes: Vec<Process>,
        params: &SchedParams,
        rng: &mut dyn RngCore,
    ) -> Result<Self> {
        let mut ctx = SimCtx::new(processes)?;
        let scheduler = S::init(&mut ctx, params, rng)?;
        Ok(Self {
            ctx,
            scheduler,
            observer: Observer::new(),
            skipped: 0,
        })
    }

    pub fn with_observer(mut self, observer: Observer) -> Self {
        self.observer = observer;
        self
    }

    pub fn run(mut self) -> Result<RunOutcome> {
        while !self.ctx.all_done() {
            self.step()?;
        }

        let params = self.scheduler.params();
        Ok(RunOutcome {
            final_clock: self.ctx.now,
            busy_ticks: self.ctx.busy,
            dispatches: self.observer.dispatches(),
            preemptions: self.observer.preemptions(),
            idle_ticks: self.observer.idle_ticks(),
            params,
            trace: self.observer.into_trace(),
            processes: self.ctx.processes,
        })
    }

    // One outer loop iteration: pick a candidate and either idle a tick or run one slice
    pub fn step(&mut self) -> Result<()> {
        if let Some(event) = self.scheduler.begin_round(&mut self.ctx) {
            debug!("{} t={} {:?}", S::POLICY, self.ctx.now, event);
            self.emit(event);
        }

        let pid = self.scheduler.select(&self.ctx).ok_or(SimError::Stalled {
            policy: S::POLICY,
            clock: self.ctx.now,
        })?;

        if self.ctx.process(pid).done {
            self.skipped += 1;
            if self.skipped > self.ctx.len() {
                return Err(SimError::Stalled {
                    policy: S::POLICY,
                    clock: self.ctx.now,
                });
            }
            return Ok(());
        }
        self.skipped = 0;

        if !self.ctx.process(pid).has_arrived(self.ctx.now) {
            trace!("{} t={} idle, process {pid} not arrived", S::POLICY, self.ctx.now);
            self.emit(SchedEvent::Idle { candidate: pid });
            self.ctx.advance_idle();
            self.observer.observe(&self.ctx);
            return Ok(());
        }

        self.run_slice(pid)?;
        self.observer.observe(&self.ctx);
        Ok(())
    }

    fn run_slice(&mut self, pid: ProcessId) -> Result<()> {
        let quantum = self.scheduler.slice(&self.ctx, pid);
        if quantum == Some(0) {
            return Err(SimError::InvalidQuantum(0));
        }

        let first = self.ctx.mark_started(pid);
        let priority = self.ctx.process(pid).priority;
        debug!(
            "{} t={} dispatch process {pid} (priority {priority}, quantum {quantum:?}, {} left)",
            S::POLICY,
            self.ctx.now,
            self.ctx.process(pid).remaining()
        );
        self.emit(SchedEvent::Dispatch {
            pid,
            priority,
            quantum,
            first,
        });

        let mut ran: Ticks = 0;
        loop {
            self.ctx.run_tick(pid);
            ran += 1;

            let process = self.ctx.process(pid);
            if process.amount_done >= process.burst_time {
                self.ctx.mark_completed(pid);
                let process = self.ctx.process(pid);
                debug!(
                    "{} t={} process {pid} done: latency {}, turnaround {}, normalized {:.3}",
                    S::POLICY,
                    self.ctx.now,
                    process.latency,
                    process.turnaround,
                    process.norm_turnaround
                );
                self.emit(SchedEvent::Complete { pid, ran });
                self.stopping(pid, true);
                return Ok(());
            }

            if Some(ran) == quantum {
                self.emit(SchedEvent::Preempt { pid, ran });
                self.stopping(pid, false);
                return Ok(());
            }
        }
    }

    fn stopping(&mut self, pid: ProcessId, completed: bool) {
        if let Some(event) = self.scheduler.stopping(&mut self.ctx, pid, completed) {
            debug!("{} t={} {:?}", S::POLICY, self.ctx.now, event);
            self.emit(event);
        }
    }

    fn emit(&mut self, event: SchedEvent) {
        self.observer.record(self.ctx.now, event);
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}
