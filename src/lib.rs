pub mod config;
pub mod core;
pub mod error;
pub mod report;
pub mod scheduler;
pub mod sim;

pub use config::{Args, SimConfig};
pub use crate::core::{Process, SchedCore, SchedEvent};
pub use error::{Result, SimError};
pub use scheduler::{Policy, Scheduler};
pub use sim::{PolicyReport, Results, Sim};
