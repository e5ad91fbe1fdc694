//! CPU process scheduling simulator for the U-Engine ecosystem.
//!
//! Given a fixed batch of processes (arrival, burst), computes per policy
//! each process's response and waiting time plus a gantt timeline of CPU
//! occupancy. Intended for comparing scheduling disciplines.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessRecord`, `ProcessState`, `Timeline`,
//!   `TimelineEvent`, `TimelineLabel`
//! - **`dispatching`**: Priority rules and the FIFO-tie-breaking `ReadyQueue`
//! - **`scheduler`**: FCFS, RR, SPN, SRT, HRRN policies, the cached `Engine`,
//!   configuration, and `SimulationKpi`
//! - **`validation`**: Batch and configuration precondition checks
//! - **`io`**: Record file parsing and result writing
//! - **`preferences`**: File-backed key/value store for front-end choices
//! - **`report`**: Text gantt chart and result tables
//! - **`workload`**: Seeded random batch generator
//!
//! # Example
//!
//! ```
//! use u_procsched::models::ProcessRecord;
//! use u_procsched::scheduler::{PolicyKind, Scheduler, SchedulerConfig};
//!
//! let mut scheduler = PolicyKind::Spn.build(&SchedulerConfig::default());
//! scheduler.add(ProcessRecord::new("A", 0, 5));
//! scheduler.add(ProcessRecord::new("B", 1, 2));
//! scheduler.add(ProcessRecord::new("C", 1, 1));
//!
//! let pairs = scheduler.timeline().unwrap().to_pairs();
//! assert_eq!(pairs[1], (5, "C".to_string()));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod dispatching;
pub mod error;
pub mod io;
pub mod models;
pub mod preferences;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
