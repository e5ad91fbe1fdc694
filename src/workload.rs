//! Random process batch generation.
//!
//! Produces reproducible batches for demos, comparisons, and invariant
//! tests. Arrivals are uniform in `[0, max_arrival]`, bursts uniform in
//! `[min_burst, max_burst]`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::ProcessRecord;

/// Seeded generator of process batches.
///
/// # Example
/// ```
/// use u_procsched::workload::WorkloadGenerator;
///
/// let batch = WorkloadGenerator::new(5).with_seed(7).generate();
/// assert_eq!(batch.len(), 5);
/// assert!(batch.iter().all(|p| p.burst > 0));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    max_arrival: i64,
    min_burst: i64,
    max_burst: i64,
    seed: u64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
            seed: 0,
        }
    }

    /// Sets the latest possible arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the burst range (clamped so bursts stay positive).
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst.max(1);
        self.max_burst = max_burst.max(self.min_burst);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates a batch named `P1`, `P2`, ...
    pub fn generate(&self) -> Vec<ProcessRecord> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (1..=self.count)
            .map(|i| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(self.min_burst..=self.max_burst);
                ProcessRecord::new(format!("P{i}"), arrival, burst)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_batch;

    #[test]
    fn test_reproducible() {
        let a = WorkloadGenerator::new(8).with_seed(42).generate();
        let b = WorkloadGenerator::new(8).with_seed(42).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ranges_respected() {
        let batch = WorkloadGenerator::new(200)
            .with_seed(1)
            .with_max_arrival(5)
            .with_burst_range(2, 4)
            .generate();
        assert!(batch.iter().all(|p| (0..=5).contains(&p.arrival)));
        assert!(batch.iter().all(|p| (2..=4).contains(&p.burst)));
        assert!(validate_batch(&batch).is_ok());
    }

    #[test]
    fn test_burst_range_clamped() {
        let batch = WorkloadGenerator::new(20)
            .with_burst_range(-3, -1)
            .generate();
        assert!(batch.iter().all(|p| p.burst == 1));
    }

    #[test]
    fn test_names() {
        let batch = WorkloadGenerator::new(3).generate();
        let names: Vec<&str> = batch.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["P1", "P2", "P3"]);
    }
}
