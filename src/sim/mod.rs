pub mod driver;
pub mod metrics;
pub mod workload;

pub use driver::Sim;
pub use metrics::{PolicyReport, Results};
pub use workload::{WorkloadSpec, generate};
