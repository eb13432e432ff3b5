use rand::{Rng, RngCore};

use super::{Policy, ProcessId, RR_QUANTUM_RANGE, SchedParams, Scheduler, SimCtx, Ticks};
use crate::error::{Result, SimError};

/// Cycles through the workload by index, giving each arrived process up to
/// one quantum per visit. The quantum is fixed for the whole run.
pub struct RoundRobinScheduler {
    quantum: Ticks,
    cursor: usize,
}

impl RoundRobinScheduler {
    pub fn with_quantum(quantum: Ticks) -> Result<Self> {
        if quantum == 0 {
            return Err(SimError::InvalidQuantum(quantum));
        }
        Ok(Self { quantum, cursor: 0 })
    }
}

impl Scheduler for RoundRobinScheduler {
    const POLICY: Policy = Policy::RoundRobin;

    fn init(_ctx: &mut SimCtx, params: &SchedParams, rng: &mut dyn RngCore) -> Result<Self> {
        let quantum = match params.rr_quantum {
            Some(quantum) => quantum,
            None => rng.random_range(RR_QUANTUM_RANGE),
        };
        Self::with_quantum(quantum)
    }

    fn select(&mut self, ctx: &SimCtx) -> Option<ProcessId> {
        let pid = self.cursor % ctx.len();
        self.cursor = self.cursor.wrapping_add(1);
        Some(pid)
    }

    fn slice(&self, _ctx: &SimCtx, _pid: ProcessId) -> Option<Ticks> {
        Some(self.quantum)
    }

    fn params(&self) -> SchedParams {
        SchedParams {
            rr_quantum: Some(self.quantum),
            ..SchedParams::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Observer, Process, SchedCore, SchedEvent};
    use rand::{SeedableRng, rngs::StdRng};

    fn core(workload: Vec<Process>, quantum: Ticks) -> SchedCore<RoundRobinScheduler> {
        let params = SchedParams {
            rr_quantum: Some(quantum),
            ..SchedParams::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        SchedCore::new(workload, &params, &mut rng)
            .unwrap()
            .with_observer(Observer::with_trace())
    }

    #[test]
    fn single_process_takes_two_slices() {
        let outcome = core(vec![Process::new(0, 0, 3)], 2).run().unwrap();

        assert_eq!(outcome.processes[0].finish_time, Some(3));
        assert_eq!(outcome.dispatches, 2);

        let slices: Vec<_> = outcome
            .trace
            .unwrap()
            .into_iter()
            .filter_map(|(_, event)| match event {
                SchedEvent::Preempt { ran, .. } | SchedEvent::Complete { ran, .. } => Some(ran),
                _ => None,
            })
            .collect();
        assert_eq!(slices, vec![2, 1]);
    }

    #[test]
    fn processes_alternate_by_index() {
        let outcome = core(vec![Process::new(0, 0, 4), Process::new(1, 0, 4)], 2)
            .run()
            .unwrap();

        let dispatched: Vec<_> = outcome
            .trace
            .unwrap()
            .into_iter()
            .filter_map(|(now, event)| match event {
                SchedEvent::Dispatch { pid, .. } => Some((now, pid)),
                _ => None,
            })
            .collect();
        assert_eq!(dispatched, vec![(0, 0), (2, 1), (4, 0), (6, 1)]);
        assert_eq!(outcome.processes[0].finish_time, Some(6));
        assert_eq!(outcome.processes[1].finish_time, Some(8));
        assert_eq!(outcome.processes[1].latency, 2);
    }

    #[test]
    fn unarrived_candidate_costs_an_idle_tick() {
        let outcome = core(vec![Process::new(0, 3, 2)], 4).run().unwrap();

        assert_eq!(outcome.idle_ticks, 3);
        assert_eq!(outcome.processes[0].start_time, Some(3));
        assert_eq!(outcome.processes[0].latency, 0);
        assert_eq!(outcome.final_clock, 5);
        assert_eq!(outcome.busy_ticks, 2);
    }

    #[test]
    fn zero_quantum_is_rejected() {
        assert!(matches!(
            RoundRobinScheduler::with_quantum(0),
            Err(SimError::InvalidQuantum(0))
        ));
    }

    #[test]
    fn random_quantum_is_in_range() {
        let mut ctx = SimCtx::new(vec![Process::new(0, 0, 1)]).unwrap();
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let scheduler =
                RoundRobinScheduler::init(&mut ctx, &SchedParams::default(), &mut rng).unwrap();
            assert!(RR_QUANTUM_RANGE.contains(&scheduler.quantum));
        }
    }
}
