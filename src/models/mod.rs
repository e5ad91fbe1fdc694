//! Process scheduling domain models.
//!
//! Provides the data types shared by every policy engine: the process
//! record handed in by the caller and the timeline handed back.
//!
//! # Domain Mappings
//!
//! | u-procsched | Operating Systems | Queueing Theory |
//! |-------------|-------------------|-----------------|
//! | ProcessRecord | Process / PCB | Customer |
//! | burst | CPU burst | Service time |
//! | response | Turnaround time | Sojourn time |
//! | Timeline | Gantt chart | Sample path |

mod process;
mod timeline;

pub use process::{ProcessRecord, ProcessState};
pub use timeline::{Timeline, TimelineEvent, TimelineLabel};
