//! Simulation quality metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Response | Mean(completion - arrival) |
//! | Avg Waiting | Mean(response - burst) |
//! | Makespan | END timestamp - first event timestamp |
//! | CPU Utilization | Sum(burst) / makespan |
//! | Throughput | Completed processes / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{ProcessRecord, Timeline};

/// Simulation performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Number of completed processes.
    pub completed: usize,
    /// Mean response (turnaround) time.
    pub avg_response: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Longest response time.
    pub max_response: i64,
    /// Length of the timeline from first event to END.
    pub makespan: i64,
    /// Fraction of the makespan spent running processes (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl SimulationKpi {
    /// Computes KPIs from simulated records and their timeline.
    ///
    /// Records without `response`/`waiting` are ignored.
    pub fn calculate(processes: &[ProcessRecord], timeline: &Timeline) -> Self {
        let mut completed: usize = 0;
        let mut total_response: i64 = 0;
        let mut total_waiting: i64 = 0;
        let mut max_response: i64 = 0;
        let mut total_burst: i64 = 0;

        for p in processes {
            if let (Some(response), Some(waiting)) = (p.response, p.waiting) {
                completed += 1;
                total_response += response;
                total_waiting += waiting;
                max_response = max_response.max(response);
                total_burst += p.burst;
            }
        }

        let makespan = match (timeline.start_time(), timeline.end_time()) {
            (Some(start), Some(end)) => (end - start).max(0),
            _ => 0,
        };

        let (avg_response, avg_waiting) = if completed == 0 {
            (0.0, 0.0)
        } else {
            (
                total_response as f64 / completed as f64,
                total_waiting as f64 / completed as f64,
            )
        };

        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                total_burst as f64 / makespan as f64,
                completed as f64 / makespan as f64,
            )
        };

        Self {
            completed,
            avg_response,
            avg_waiting,
            max_response,
            makespan,
            cpu_utilization,
            throughput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Engine, Fcfs, RoundRobin, Scheduler};

    #[test]
    fn test_kpi_fcfs() {
        let mut engine = Engine::new(Fcfs::new()).with_processes(vec![
            ProcessRecord::new("A", 0, 4),
            ProcessRecord::new("B", 1, 3),
            ProcessRecord::new("C", 2, 1),
        ]);
        let timeline = engine.timeline().unwrap().clone();
        let kpi = SimulationKpi::calculate(engine.results().unwrap(), &timeline);

        assert_eq!(kpi.completed, 3);
        assert!((kpi.avg_response - 16.0 / 3.0).abs() < 1e-10); // (4 + 6 + 6) / 3
        assert!((kpi.avg_waiting - 8.0 / 3.0).abs() < 1e-10); // (0 + 3 + 5) / 3
        assert_eq!(kpi.max_response, 6);
        assert_eq!(kpi.makespan, 8);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 3.0 / 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_context_switches_cost_utilization() {
        let mut engine =
            Engine::new(RoundRobin::new(2, 1)).with_processes(vec![ProcessRecord::new("A", 0, 5)]);
        let timeline = engine.timeline().unwrap().clone();
        let kpi = SimulationKpi::calculate(engine.results().unwrap(), &timeline);

        // 5 units of work over a makespan of 7.
        assert_eq!(kpi.makespan, 7);
        assert!((kpi.cpu_utilization - 5.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = SimulationKpi::calculate(&[], &Timeline::new());
        assert_eq!(kpi.completed, 0);
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.avg_response - 0.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_ignores_unscheduled() {
        let records = vec![ProcessRecord::new("A", 0, 4)];
        let kpi = SimulationKpi::calculate(&records, &Timeline::new());
        assert_eq!(kpi.completed, 0);
    }
}
