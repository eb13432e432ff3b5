use clap::Parser;

use crate::core::Ticks;
use crate::error::{Result, SimError};
use crate::scheduler::SchedParams;

pub const DEFAULT_COUNT: i64 = 50;
pub const MAX_COUNT: i64 = 100;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Compare FIFO, SJF, round robin and MFQ scheduling over one random workload",
    long_about = None
)]
pub struct Args {
    /// Number of processes to generate (default 50, at most 100)
    #[arg(value_name = "COUNT", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Seed for the workload and the random policy parameters
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Fixed round robin quantum instead of a random one in 1..=10
    #[arg(
        short,
        long,
        value_name = "TICKS",
        value_parser = clap::value_parser!(u64).range(1..=10)
    )]
    pub quantum: Option<Ticks>,

    /// Fixed MFQ priority reset period instead of a random one in 100..=500
    #[arg(
        short,
        long = "reset-time",
        value_name = "TICKS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub reset_time: Option<Ticks>,
}

/// Settings for one simulation, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub count: usize,
    pub seed: u64,
    pub params: SchedParams,
}

impl SimConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        Ok(Self {
            count: resolve_count(args.count)?,
            seed: args.seed.unwrap_or_else(rand::random),
            params: SchedParams {
                rr_quantum: args.quantum,
                mfq_reset_period: args.reset_time,
            },
        })
    }
}

// Absent means the default; anything above the cap is clamped
pub fn resolve_count(count: Option<i64>) -> Result<usize> {
    match count.unwrap_or(DEFAULT_COUNT) {
        count if count <= 0 => Err(SimError::InvalidWorkloadSize(count)),
        count => Ok(count.min(MAX_COUNT) as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_defaults_and_clamps() {
        assert_eq!(resolve_count(None), Ok(50));
        assert_eq!(resolve_count(Some(7)), Ok(7));
        assert_eq!(resolve_count(Some(100)), Ok(100));
        assert_eq!(resolve_count(Some(250)), Ok(100));
    }

    #[test]
    fn non_positive_count_is_rejected() {
        assert_eq!(resolve_count(Some(0)), Err(SimError::InvalidWorkloadSize(0)));
        assert_eq!(resolve_count(Some(-3)), Err(SimError::InvalidWorkloadSize(-3)));
    }

    #[test]
    fn parses_overrides() {
        let args =
            Args::try_parse_from(["schedsim", "20", "--seed", "9", "-q", "3", "--reset-time", "150"])
                .unwrap();
        let config = SimConfig::from_args(&args).unwrap();

        assert_eq!(config.count, 20);
        assert_eq!(config.seed, 9);
        assert_eq!(config.params.rr_quantum, Some(3));
        assert_eq!(config.params.mfq_reset_period, Some(150));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Args::try_parse_from(["schedsim", "lots"]).is_err());
        assert!(Args::try_parse_from(["schedsim", "--quantum", "0"]).is_err());
        assert!(Args::try_parse_from(["schedsim", "--quantum", "11"]).is_err());
        assert!(Args::try_parse_from(["schedsim", "5", "6"]).is_err());

        let args = Args::try_parse_from(["schedsim", "-4"]).unwrap();
        assert_eq!(
            SimConfig::from_args(&args),
            Err(SimError::InvalidWorkloadSize(-4))
        );
    }
}
