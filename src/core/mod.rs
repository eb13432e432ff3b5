pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::{RunOutcome, SchedCore};
pub use event::SchedEvent;
pub use observer::Observer;
pub use state::{Priority, Process, ProcessId, SimCtx, TOP_PRIORITY, Ticks};
