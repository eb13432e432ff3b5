use crate::error::{Result, SimError};

// Index into the process Vec; equal to the position in the generated workload
pub type ProcessId = usize;
pub type Ticks = u64;
// 1 is the highest priority band
pub type Priority = usize;

pub const TOP_PRIORITY: Priority = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Process {
    pub name: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub amount_done: Ticks,
    pub start_time: Option<Ticks>,
    pub latency: Ticks,
    pub finish_time: Option<Ticks>,
    pub turnaround: Ticks,
    pub norm_turnaround: f64,
    pub priority: Priority,
    pub done: bool,
}

impl Process {
    pub fn new(name: ProcessId, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            name,
            arrival_time,
            burst_time,
            amount_done: 0,
            start_time: None,
            latency: 0,
            finish_time: None,
            turnaround: 0,
            norm_turnaround: 0.0,
            priority: TOP_PRIORITY,
            done: false,
        }
    }

    pub fn has_arrived(&self, now: Ticks) -> bool {
        self.arrival_time <= now
    }

    pub fn remaining(&self) -> Ticks {
        self.burst_time.saturating_sub(self.amount_done)
    }
}

/// Private per-run state: the engine's own copy of the workload plus the
/// logical clock and busy-tick counter.
#[derive(Debug, Clone)]
pub struct SimCtx {
    pub now: Ticks,
    pub busy: Ticks,
    pub processes: Vec<Process>,
}

impl SimCtx {
    pub fn new(processes: Vec<Process>) -> Result<Self> {
        if processes.is_empty() {
            return Err(SimError::EmptyWorkload);
        }

        for (index, process) in processes.iter().enumerate() {
            debug_assert_eq!(process.name, index, "ProcessId must match Vec index");
            if process.burst_time == 0 {
                return Err(SimError::ZeroBurst { pid: process.name });
            }
        }

        Ok(Self {
            now: 0,
            busy: 0,
            processes,
        })
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn process(&self, pid: ProcessId) -> &Process {
        &self.processes[pid]
    }

    pub fn process_mut(&mut self, pid: ProcessId) -> &mut Process {
        &mut self.processes[pid]
    }

    pub fn advance_idle(&mut self) {
        self.now = self.now.saturating_add(1);
    }

    // Returns true on the first dispatch of `pid`
    pub fn mark_started(&mut self, pid: ProcessId) -> bool {
        let now = self.now;
        let process = self.process_mut(pid);
        if process.start_time.is_some() {
            return false;
        }

        process.start_time = Some(now);
        process.latency = now.saturating_sub(process.arrival_time);
        true
    }

    pub fn run_tick(&mut self, pid: ProcessId) {
        self.now = self.now.saturating_add(1);
        self.busy = self.busy.saturating_add(1);

        let process = self.process_mut(pid);
        debug_assert!(!process.done, "Process {pid} ran after completion");
        process.amount_done += 1;
    }

    pub fn mark_completed(&mut self, pid: ProcessId) {
        let now = self.now;
        let process = self.process_mut(pid);
        debug_assert!(
            process.amount_done >= process.burst_time,
            "Process {pid} completed with {} of {} ticks done",
            process.amount_done,
            process.burst_time
        );
        debug_assert!(!process.done, "Process {pid} completed twice");

        process.done = true;
        process.finish_time = Some(now);
        process.turnaround = process.latency + process.burst_time;
        process.norm_turnaround = process.turnaround as f64 / process.burst_time as f64;
    }

    pub fn all_done(&self) -> bool {
        self.processes.iter().all(|process| process.done)
    }

    pub fn utilization(&self) -> f64 {
        if self.now == 0 {
            return 0.0;
        }
        self.busy as f64 / self.now as f64
    }
}
