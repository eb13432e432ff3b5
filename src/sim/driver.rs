use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};

use super::{metrics::PolicyReport, workload::WorkloadSpec};
use crate::{
    config::SimConfig,
    core::{Process, SchedCore},
    error::Result,
    scheduler::{
        FifoScheduler, MfqScheduler, Policy, RoundRobinScheduler, SchedParams, Scheduler,
        SjfScheduler,
    },
};

/// Runs every policy against its own copy of one workload.
pub struct Sim {
    workload: Vec<Process>,
    params: SchedParams,
    // Shared stream for the per-run random parameters, drawn in run order
    rng: StdRng,
}

impl Sim {
    pub fn new(workload: Vec<Process>, params: SchedParams, seed: u64) -> Self {
        Self {
            workload,
            params,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_config(config: &SimConfig) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let workload = WorkloadSpec::new(config.count).generate(&mut rng)?;
        info!(
            "Generated {} processes with seed {}",
            workload.len(),
            config.seed
        );

        Ok(Self {
            workload,
            params: config.params,
            rng,
        })
    }

    pub fn workload(&self) -> &[Process] {
        &self.workload
    }

    pub fn run_policy(&mut self, policy: Policy) -> Result<PolicyReport> {
        match policy {
            Policy::Fifo => self.run_with::<FifoScheduler>(),
            Policy::Sjf => self.run_with::<SjfScheduler>(),
            Policy::RoundRobin => self.run_with::<RoundRobinScheduler>(),
            Policy::Mfq => self.run_with::<MfqScheduler>(),
        }
    }

    // A failed run is logged and returned; it does not stop the others
    pub fn run_all(&mut self) -> Vec<(Policy, Result<PolicyReport>)> {
        Policy::ALL
            .into_iter()
            .map(|policy| {
                let report = self.run_policy(policy);
                if let Err(err) = &report {
                    warn!("{policy} run failed: {err}");
                }
                (policy, report)
            })
            .collect()
    }

    fn run_with<S: Scheduler>(&mut self) -> Result<PolicyReport> {
        // The engine mutates its own copy; the original workload stays untouched
        let core = SchedCore::<S>::new(self.workload.clone(), &self.params, &mut self.rng)?;
        let outcome = core.run()?;
        let report = PolicyReport::from_outcome(S::POLICY, outcome)?;

        info!(
            "{} finished at tick {} ({} busy, {} dispatches)",
            S::POLICY,
            report.final_clock,
            report.busy_ticks,
            report.dispatches
        );
        for process in &report.processes {
            debug!(
                "{} process {}: arrival {}, burst {}, start {:?}, finish {:?}, latency {}, turnaround {}, normalized {:.3}",
                S::POLICY,
                process.name,
                process.arrival_time,
                process.burst_time,
                process.start_time,
                process.finish_time,
                process.latency,
                process.turnaround,
                process.norm_turnaround
            );
        }
        Ok(report)
    }
}
