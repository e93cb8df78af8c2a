//! # Tabla de Resultados
//! src/render/table.rs
//!
//! Tabla por proceso (Process, Finish Time, TAT, WT) seguida de la línea
//! de promedios, utilización de CPU y throughput.

use crate::stats::{Aggregates, StatisticsReport};
use std::collections::BTreeMap;

/// Línea de métricas agregadas (dos decimales, utilización en %)
pub fn averages_line(agg: &Aggregates) -> String {
    format!(
        "CPU Utilization: {:.2}% | Throughput: {:.2} processes/unit time | ATAT: {:.2} | AWT: {:.2}",
        agg.cpu_utilization * 100.0,
        agg.throughput,
        agg.avg_tat,
        agg.avg_wt
    )
}

/// Dibuja la tabla completa del reporte
pub fn render_report(report: &StatisticsReport) -> String {
    let pid_width = report
        .processes()
        .iter()
        .map(|p| p.pid.chars().count())
        .max()
        .unwrap_or(0)
        .max("Process".len());

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{}{}{}{}{}{}{}{}",
            left,
            "─".repeat(pid_width + 2),
            mid,
            "─".repeat(13),
            mid,
            "─".repeat(8),
            mid,
            "─".repeat(8),
            right
        )
    };

    let mut lines = Vec::with_capacity(report.processes().len() + 6);
    lines.push(rule("┌", "┬", "┐"));
    lines.push(format!(
        "│ {:<w$} │ Finish Time │  TAT   │   WT   │",
        "Process",
        w = pid_width
    ));
    lines.push(rule("├", "┼", "┤"));

    for p in report.processes() {
        lines.push(format!(
            "│ {:<w$} │ {:^11} │ {:^6} │ {:^6} │",
            p.pid,
            p.completion,
            p.tat,
            p.wt,
            w = pid_width
        ));
    }

    lines.push(rule("└", "┴", "┘"));
    lines.push(averages_line(report.aggregates()));

    lines.join("\n")
}

/// Leyenda de colores `pid: #rrggbb`
pub fn render_legend(colors: &BTreeMap<String, String>) -> String {
    colors
        .iter()
        .map(|(pid, color)| format!("{}: {}", pid, color))
        .collect::<Vec<_>>()
        .join("  ")
}
