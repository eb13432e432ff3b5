use std::ops::RangeInclusive;

use rand::Rng;

use crate::core::{Process, Ticks};
use crate::error::{Result, SimError};

pub const DEFAULT_ARRIVAL: RangeInclusive<Ticks> = 0..=10;
pub const DEFAULT_BURST: RangeInclusive<Ticks> = 3..=25;

/// Shape of a randomly generated workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadSpec {
    pub count: usize,
    pub arrival: RangeInclusive<Ticks>,
    pub burst: RangeInclusive<Ticks>,
}

impl WorkloadSpec {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival: DEFAULT_ARRIVAL,
            burst: DEFAULT_BURST,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(SimError::EmptyWorkload);
        }
        if self.arrival.is_empty() {
            return Err(SimError::InvalidRange {
                what: "arrival",
                start: *self.arrival.start(),
                end: *self.arrival.end(),
            });
        }
        // Zero-length bursts would never complete a tick of work
        if self.burst.is_empty() || *self.burst.start() == 0 {
            return Err(SimError::InvalidRange {
                what: "burst",
                start: *self.burst.start(),
                end: *self.burst.end(),
            });
        }
        Ok(())
    }

    /// Draws `count` processes; each process is named by its index.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Process>> {
        self.validate()?;

        let processes = (0..self.count)
            .map(|name| {
                let arrival_time = rng.random_range(self.arrival.clone());
                let burst_time = rng.random_range(self.burst.clone());
                Process::new(name, arrival_time, burst_time)
            })
            .collect();
        Ok(processes)
    }
}

pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Vec<Process>> {
    WorkloadSpec::new(count).generate(rng)
}
