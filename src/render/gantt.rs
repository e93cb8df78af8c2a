//! # Diagrama de Gantt en texto
//! src/render/gantt.rs
//!
//! Una celda por unidad de tiempo (pid o `Idle`) y debajo las etiquetas
//! de tiempo alineadas con los bordes de cada celda.
//!
//! ```text
//! | A  | A  |Idle| B  |
//! 0    1    2    3    4
//! ```

use crate::scheduler::TimelineEvent;

/// Ancho por defecto de una celda
pub const UNIT_WIDTH: usize = 4;

/// Etiquetas de tiempo `0..=total`
pub fn time_labels(total: u64) -> Vec<u64> {
    (0..=total).collect()
}

/// Dibuja el diagrama para una línea de tiempo completa
pub fn render_gantt(events: &[TimelineEvent], cell_width: usize) -> String {
    let width = cell_width.max(1);

    let mut bar = String::from("|");
    for event in events {
        bar.push_str(&format!("{:^w$.w$}|", event.label(), w = width));
    }

    let total = events.last().map(|e| e.time + 1).unwrap_or(0);
    let labels: String = time_labels(total)
        .iter()
        .map(|t| format!("{:<w$}", t, w = width + 1))
        .collect();

    format!("{}\n{}", bar, labels.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_labels() {
        assert_eq!(time_labels(3), vec![0, 1, 2, 3]);
        assert_eq!(time_labels(0), vec![0]);
    }

    #[test]
    fn test_render_small_chart() {
        let events = vec![
            TimelineEvent::run(0, "A", vec![]),
            TimelineEvent::run(1, "A", vec![]),
            TimelineEvent::idle(2),
        ];
        let chart = render_gantt(&events, 4);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "| A  | A  |Idle|");
        assert_eq!(lines[1], "0    1    2    3");
    }

    #[test]
    fn test_long_pids_are_truncated() {
        let events = vec![TimelineEvent::run(0, "PROCESS", vec![])];
        let chart = render_gantt(&events, 4);
        assert!(chart.starts_with("|PROC|"));
    }

    #[test]
    fn test_empty_timeline() {
        assert_eq!(render_gantt(&[], 4), "|\n0");
    }
}
