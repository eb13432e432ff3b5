use rand::{SeedableRng, rngs::StdRng};
use rstest::rstest;
use schedsim::{
    Policy, Process, Results, SchedCore, Scheduler,
    core::RunOutcome,
    scheduler::{
        FifoScheduler, MFQ_QUANTA, MfqScheduler, RoundRobinScheduler, SchedParams, SjfScheduler,
    },
    sim::{Sim, generate},
};

fn run<S: Scheduler>(workload: Vec<Process>, seed: u64) -> RunOutcome {
    let mut rng = StdRng::seed_from_u64(seed);
    SchedCore::<S>::new(workload, &SchedParams::default(), &mut rng)
        .expect("workload is valid")
        .run()
        .expect("run terminates")
}

fn run_policy(policy: Policy, workload: Vec<Process>, seed: u64) -> RunOutcome {
    match policy {
        Policy::Fifo => run::<FifoScheduler>(workload, seed),
        Policy::Sjf => run::<SjfScheduler>(workload, seed),
        Policy::RoundRobin => run::<RoundRobinScheduler>(workload, seed),
        Policy::Mfq => run::<MfqScheduler>(workload, seed),
    }
}

#[rstest]
#[case::fifo(Policy::Fifo)]
#[case::sjf(Policy::Sjf)]
#[case::round_robin(Policy::RoundRobin)]
#[case::mfq(Policy::Mfq)]
fn every_process_finishes_consistently(#[case] policy: Policy) {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let workload = generate(50, &mut rng).unwrap();
        let total_burst: u64 = workload.iter().map(|p| p.burst_time).sum();
        let max_quantum = *MFQ_QUANTA.iter().max().unwrap();
        let bound = total_burst + workload.len() as u64 * max_quantum;

        let outcome = run_policy(policy, workload, seed);

        assert!(outcome.final_clock <= bound, "{policy} seed {seed} overran");
        assert_eq!(outcome.busy_ticks, total_burst);
        for process in &outcome.processes {
            assert!(process.done);
            assert_eq!(process.amount_done, process.burst_time);
            assert_eq!(process.turnaround, process.latency + process.burst_time);
            let finish = process.finish_time.unwrap();
            let start = process.start_time.unwrap();
            assert!(start >= process.arrival_time);
            assert_eq!(process.latency, start - process.arrival_time);
            assert!(finish >= start + process.burst_time);
            assert_eq!(
                process.norm_turnaround,
                process.turnaround as f64 / process.burst_time as f64
            );
            assert!(process.norm_turnaround >= 1.0);
        }

        let results =
            Results::aggregate(&outcome.processes, outcome.busy_ticks, outcome.final_clock)
                .unwrap();
        assert!((0.0..=1.0).contains(&results.utilization));
        assert!(results.mean_latency >= 0.0);
    }
}

#[rstest]
#[case::fifo(Policy::Fifo)]
#[case::sjf(Policy::Sjf)]
fn non_preemptive_turnaround_matches_finish(#[case] policy: Policy) {
    let mut rng = StdRng::seed_from_u64(11);
    let workload = generate(30, &mut rng).unwrap();
    let outcome = run_policy(policy, workload, 11);

    for process in &outcome.processes {
        assert_eq!(
            process.turnaround,
            process.finish_time.unwrap() - process.arrival_time
        );
    }
    assert_eq!(outcome.preemptions, 0);
    assert_eq!(outcome.dispatches, 30);
}

#[rstest]
#[case::fifo(Policy::Fifo, [0, 5], [5, 8], [0, 3])]
#[case::sjf(Policy::Sjf, [5, 2], [10, 5], [5, 0])]
fn two_process_scenario(
    #[case] policy: Policy,
    #[case] starts: [u64; 2],
    #[case] finishes: [u64; 2],
    #[case] latencies: [u64; 2],
) {
    let workload = vec![Process::new(0, 0, 5), Process::new(1, 2, 3)];
    let outcome = run_policy(policy, workload, 0);

    for (pid, process) in outcome.processes.iter().enumerate() {
        assert_eq!(process.start_time, Some(starts[pid]));
        assert_eq!(process.finish_time, Some(finishes[pid]));
        assert_eq!(process.latency, latencies[pid]);
    }
}

#[test]
fn sim_is_deterministic_for_a_seed() {
    let config = schedsim::SimConfig {
        count: 40,
        seed: 1234,
        params: SchedParams::default(),
    };

    let first: Vec<_> = Sim::from_config(&config)
        .unwrap()
        .run_all()
        .into_iter()
        .map(|(_, report)| report.unwrap().results)
        .collect();
    let second: Vec<_> = Sim::from_config(&config)
        .unwrap()
        .run_all()
        .into_iter()
        .map(|(_, report)| report.unwrap().results)
        .collect();

    assert_eq!(first, second);
}
