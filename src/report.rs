//! Text rendering of timelines and result tables.

use std::fmt::Write as _;

use crate::models::{ProcessRecord, Timeline};
use crate::scheduler::SimulationKpi;

/// Smallest accepted zoom.
pub const MIN_ZOOM: i64 = 1;
/// Largest accepted zoom.
pub const MAX_ZOOM: i64 = 50;

/// Renders a vertical gantt chart.
///
/// Each event prints one bar line with its time and label; `zoom` time
/// units between consecutive events add one filler line (minus the event
/// line itself). `zoom` is clamped to `MIN_ZOOM..=MAX_ZOOM`.
pub fn render_gantt(timeline: &Timeline, zoom: i64) -> String {
    let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    let mut out = String::new();
    let mut last = timeline.start_time().unwrap_or(0);

    for event in timeline {
        let fillers = ((event.time - last) / zoom - 1).max(0);
        for _ in 0..fillers {
            out.push_str("|\t\t|\n");
        }
        let _ = writeln!(out, "|\t\t|  T: {}, P: {}", event.time, event.label);
        last = event.time;
    }
    out
}

/// Renders the `name response waiting` table.
pub fn render_results(processes: &[ProcessRecord]) -> String {
    let mut out = String::from("name\t\tresponse\twaiting\n");
    for p in processes {
        let _ = writeln!(
            out,
            "{}\t\t{}\t\t{}",
            p.name,
            p.response.map_or_else(|| "-".to_string(), |v| v.to_string()),
            p.waiting.map_or_else(|| "-".to_string(), |v| v.to_string()),
        );
    }
    out
}

/// Renders a KPI summary block.
pub fn render_kpi(kpi: &SimulationKpi) -> String {
    format!(
        "processes: {}\navg response: {:.2}\navg waiting: {:.2}\nmax response: {}\n\
         makespan: {}\ncpu utilization: {:.1}%\nthroughput: {:.3}/tick\n",
        kpi.completed,
        kpi.avg_response,
        kpi.avg_waiting,
        kpi.max_response,
        kpi.makespan,
        kpi.cpu_utilization * 100.0,
        kpi.throughput,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineEvent;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(TimelineEvent::process(0, "A"));
        t.push(TimelineEvent::process(4, "B"));
        t.push(TimelineEvent::end(5));
        t
    }

    #[test]
    fn test_gantt_zoom_one() {
        let out = render_gantt(&sample_timeline(), 1);
        let lines: Vec<&str> = out.lines().collect();
        // A at 0, 3 fillers for 0..4, B at 4, END at 5.
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "|\t\t|  T: 0, P: A");
        assert_eq!(lines[1], "|\t\t|");
        assert_eq!(lines[4], "|\t\t|  T: 4, P: B");
        assert_eq!(lines[5], "|\t\t|  T: 5, P: END");
    }

    #[test]
    fn test_gantt_zoom_compresses() {
        let out = render_gantt(&sample_timeline(), 2);
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn test_gantt_zoom_clamped() {
        assert_eq!(
            render_gantt(&sample_timeline(), 0),
            render_gantt(&sample_timeline(), 1)
        );
        assert_eq!(render_gantt(&sample_timeline(), 500).lines().count(), 3);
    }

    #[test]
    fn test_gantt_empty() {
        assert_eq!(render_gantt(&Timeline::new(), 2), "");
    }

    #[test]
    fn test_results_table() {
        let mut a = ProcessRecord::new("A", 0, 4);
        a.complete_at(4);
        let out = render_results(&[a, ProcessRecord::new("B", 1, 1)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "name\t\tresponse\twaiting");
        assert_eq!(lines[1], "A\t\t4\t\t0");
        assert_eq!(lines[2], "B\t\t-\t\t-");
    }

    #[test]
    fn test_kpi_block() {
        let kpi = SimulationKpi {
            completed: 2,
            avg_response: 3.5,
            avg_waiting: 1.0,
            max_response: 5,
            makespan: 6,
            cpu_utilization: 0.5,
            throughput: 1.0 / 3.0,
        };
        let out = render_kpi(&kpi);
        assert!(out.contains("avg response: 3.50"));
        assert!(out.contains("cpu utilization: 50.0%"));
        assert!(out.contains("throughput: 0.333/tick"));
    }
}
