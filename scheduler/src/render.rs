/*!
 * Text Report
 * Plain-text Gantt chart, per-process table and averages
 */

use crate::scheduler::{SimulationResult, Timeline};

pub fn render_gantt(timeline: &Timeline) -> String {
    if timeline.is_empty() {
        return "Gantt chart is empty.\n".to_owned();
    }

    let labels: String = timeline
        .intervals()
        .iter()
        .map(|interval| format!("P{} | ", interval.pid))
        .collect();
    let mut out = format!("Gantt Chart:\n{labels}\n");

    let boundaries: Vec<String> = timeline
        .boundaries()
        .iter()
        .map(ToString::to_string)
        .collect();
    out.push_str(&boundaries.join(" "));
    out.push('\n');
    out
}

pub fn render_table(result: &SimulationResult) -> String {
    let rows: String = result
        .processes
        .iter()
        .map(|outcome| {
            let process = outcome.process();
            format!(
                "P{}\t{}\t{}\t{}\t{}\n",
                process.pid(),
                process.arrival_time(),
                process.burst_time(),
                outcome.waiting_time(),
                outcome.turnaround_time()
            )
        })
        .collect();
    format!("Process\tArrival\tBurst\tWaiting\tTurnaround\n{rows}")
}

pub fn render_averages(result: &SimulationResult) -> String {
    format!(
        "Average Waiting Time: {:.2}\nAverage Turnaround Time: {:.2}\n",
        result.average_waiting_time, result.average_turnaround_time
    )
}

pub fn render_report(result: &SimulationResult) -> String {
    format!(
        "{}\n{}\n{}",
        render_gantt(&result.timeline),
        render_table(result),
        render_averages(result)
    )
}
