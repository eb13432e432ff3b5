use crate::core::{Priority, ProcessId, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedEvent {
    // Selected candidate had not arrived; the clock advanced with no work done
    Idle {
        candidate: ProcessId,
    },
    Dispatch {
        pid: ProcessId,
        priority: Priority,
        // None when the process runs to completion
        quantum: Option<Ticks>,
        first: bool,
    },
    Preempt {
        pid: ProcessId,
        ran: Ticks,
    },
    Complete {
        pid: ProcessId,
        ran: Ticks,
    },
    Demote {
        pid: ProcessId,
        from: Priority,
        to: Priority,
    },
    PriorityReset {
        processes: usize,
    },
}
