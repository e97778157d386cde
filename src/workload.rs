//! Random workload generation.
//!
//! Produces valid process lists for demos and tests. Every generated list
//! passes [`validate_processes`](crate::validation::validate_processes):
//! IDs run `1..=n`, arrivals are non-negative, bursts and priorities are
//! positive.
//!
//! # Defaults
//!
//! | Field | Range |
//! |-------|-------|
//! | Process count | 5..=10 |
//! | Arrival | 0..=9 |
//! | Burst | 1..=10 |
//! | Priority | 1..=5 |

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ScheduleError;
use crate::models::Process;

/// Inclusive ranges for generated workloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Fewest processes to generate.
    pub min_processes: u32,
    /// Most processes to generate.
    pub max_processes: u32,
    /// Latest possible arrival (earliest is 0).
    pub max_arrival: i64,
    /// Shortest burst.
    pub min_burst: i64,
    /// Longest burst.
    pub max_burst: i64,
    /// Best (smallest) priority value.
    pub min_priority: i32,
    /// Worst (largest) priority value.
    pub max_priority: i32,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            min_processes: 5,
            max_processes: 10,
            max_arrival: 9,
            min_burst: 1,
            max_burst: 10,
            min_priority: 1,
            max_priority: 5,
        }
    }
}

impl WorkloadConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the process count range.
    pub fn with_process_count(mut self, min: u32, max: u32) -> Self {
        self.min_processes = min;
        self.max_processes = max;
        self
    }

    /// Sets the latest arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst = min;
        self.max_burst = max;
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.min_priority = min;
        self.max_priority = max;
        self
    }

    /// Checks that every range is non-empty and yields valid processes.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.min_processes == 0 || self.min_processes > self.max_processes {
            return Err(ScheduleError::InvalidConfig(format!(
                "process count range {}..={} must be non-empty and start at 1 or more",
                self.min_processes, self.max_processes
            )));
        }
        if self.max_arrival < 0 {
            return Err(ScheduleError::InvalidConfig(format!(
                "max arrival {} must be non-negative",
                self.max_arrival
            )));
        }
        if self.min_burst <= 0 || self.min_burst > self.max_burst {
            return Err(ScheduleError::InvalidConfig(format!(
                "burst range {}..={} must be non-empty and positive",
                self.min_burst, self.max_burst
            )));
        }
        if self.min_priority <= 0 || self.min_priority > self.max_priority {
            return Err(ScheduleError::InvalidConfig(format!(
                "priority range {}..={} must be non-empty and positive",
                self.min_priority, self.max_priority
            )));
        }
        Ok(())
    }
}

/// Generates a random process list.
///
/// # Errors
/// Returns [`ScheduleError::InvalidConfig`] if `config` has an empty or
/// non-positive range.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_priority::workload::{generate, WorkloadConfig};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let processes = generate(&WorkloadConfig::default(), &mut rng).unwrap();
/// assert!((5..=10).contains(&processes.len()));
/// ```
pub fn generate<R: Rng>(
    config: &WorkloadConfig,
    rng: &mut R,
) -> Result<Vec<Process>, ScheduleError> {
    config.validate()?;

    let count = rng.random_range(config.min_processes..=config.max_processes);
    let processes: Vec<Process> = (1..=count)
        .map(|id| {
            Process::new(
                id,
                rng.random_range(0..=config.max_arrival),
                rng.random_range(config.min_burst..=config.max_burst),
                rng.random_range(config.min_priority..=config.max_priority),
            )
        })
        .collect();

    debug!(count, "generated workload");
    Ok(processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = WorkloadConfig::default();

        for _ in 0..100 {
            let processes = generate(&config, &mut rng).unwrap();
            assert!((5..=10).contains(&processes.len()));
            for (i, p) in processes.iter().enumerate() {
                assert_eq!(p.id as usize, i + 1);
                assert!((0..=9).contains(&p.arrival));
                assert!((1..=10).contains(&p.burst));
                assert!((1..=5).contains(&p.priority));
            }
            assert!(validate_processes(&processes).is_ok());
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = WorkloadConfig::default();
        let a = generate(&config, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate(&config, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_config() {
        let config = WorkloadConfig::new()
            .with_process_count(3, 3)
            .with_max_arrival(0)
            .with_burst_range(2, 2)
            .with_priority_range(7, 7);
        let processes = generate(&config, &mut StdRng::seed_from_u64(0)).unwrap();

        assert_eq!(
            processes,
            vec![
                Process::new(1, 0, 2, 7),
                Process::new(2, 0, 2, 7),
                Process::new(3, 0, 2, 7),
            ]
        );
    }

    #[test]
    fn test_invalid_config() {
        let mut rng = StdRng::seed_from_u64(0);
        let bad = [
            WorkloadConfig::new().with_process_count(0, 3),
            WorkloadConfig::new().with_process_count(4, 2),
            WorkloadConfig::new().with_max_arrival(-1),
            WorkloadConfig::new().with_burst_range(0, 5),
            WorkloadConfig::new().with_priority_range(3, 1),
        ];
        for config in &bad {
            assert!(matches!(
                generate(config, &mut rng),
                Err(ScheduleError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: WorkloadConfig = serde_json::from_str(r#"{"max_priority": 9}"#).unwrap();
        assert_eq!(config.max_priority, 9);
        assert_eq!(config.min_processes, 5);
    }
}
