//! # Reporte de Estadísticas
//! src/stats/report.rs
//!
//! Métricas por proceso (TAT, WT) y agregadas (promedios, utilización de
//! CPU, throughput). Se calcula una sola vez, con todos los procesos
//! completados, y es inmutable después.
//!
//! ## Fórmulas
//!
//! - `tat = completion - arrival`
//! - `wt = tat - burst`
//! - `cpu_utilization = total_burst / makespan`
//! - `throughput = n / makespan`

use crate::error::{Result, SchedError};
use crate::process::Registry;
use serde::Serialize;

/// Métricas de un proceso
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessStats {
    pub pid: String,
    pub arrival: u64,
    pub burst: u64,
    pub completion: u64,
    pub tat: u64,
    pub wt: u64,
}

/// Métricas agregadas
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregates {
    pub avg_tat: f64,
    pub avg_wt: f64,
    pub makespan: u64,
    pub total_burst: u64,
    /// Razón (1.0 = sin tiempo ocioso)
    pub cpu_utilization: f64,
    /// Procesos completados por unidad de tiempo
    pub throughput: f64,
}

/// Reporte final de una simulación
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    processes: Vec<ProcessStats>,
    aggregates: Aggregates,
}

impl StatisticsReport {
    /// Calcula el reporte a partir de un registro completado
    ///
    /// # Errores
    ///
    /// * `EmptyInput` si el registro está vacío
    /// * `SimulationIncomplete` si algún proceso no terminó
    /// * `InternalConsistency` si algún TAT o WT resulta negativo
    pub fn compute(registry: &Registry) -> Result<Self> {
        if registry.is_empty() {
            return Err(SchedError::EmptyInput);
        }

        let mut processes = Vec::with_capacity(registry.len());

        for p in registry.all() {
            let completion = p.completion().ok_or(SchedError::SimulationIncomplete {
                completed: registry.completed_count(),
                total: registry.len(),
            })?;

            // Nunca se recorta a cero: un valor negativo es un defecto
            let tat = completion.checked_sub(p.arrival()).ok_or_else(|| {
                SchedError::InternalConsistency(format!(
                    "process {} completed at {} before arriving at {}",
                    p.pid(),
                    completion,
                    p.arrival()
                ))
            })?;
            let wt = tat.checked_sub(p.burst()).ok_or_else(|| {
                SchedError::InternalConsistency(format!(
                    "process {} has turnaround {} shorter than burst {}",
                    p.pid(),
                    tat,
                    p.burst()
                ))
            })?;

            processes.push(ProcessStats {
                pid: p.pid().to_string(),
                arrival: p.arrival(),
                burst: p.burst(),
                completion,
                tat,
                wt,
            });
        }

        let aggregates = Self::aggregate(&processes)?;

        Ok(Self {
            processes,
            aggregates,
        })
    }

    fn aggregate(processes: &[ProcessStats]) -> Result<Aggregates> {
        let n = processes.len() as f64;
        let total_tat: u64 = processes.iter().map(|p| p.tat).sum();
        let total_wt: u64 = processes.iter().map(|p| p.wt).sum();
        let total_burst: u64 = processes.iter().map(|p| p.burst).sum();
        let makespan = processes.iter().map(|p| p.completion).max().unwrap_or(0);

        // burst >= 1 implica makespan >= 1
        if makespan == 0 {
            return Err(SchedError::InternalConsistency(
                "makespan is zero with completed processes".to_string(),
            ));
        }

        Ok(Aggregates {
            avg_tat: total_tat as f64 / n,
            avg_wt: total_wt as f64 / n,
            makespan,
            total_burst,
            cpu_utilization: total_burst as f64 / makespan as f64,
            throughput: n / makespan as f64,
        })
    }

    /// Métricas por proceso, en orden del registro
    pub fn processes(&self) -> &[ProcessStats] {
        &self.processes
    }

    pub fn aggregates(&self) -> &Aggregates {
        &self.aggregates
    }

    pub fn get(&self, pid: &str) -> Option<&ProcessStats> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    pub fn makespan(&self) -> u64 {
        self.aggregates.makespan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessSpec;

    fn completed_registry(entries: &[(&str, i64, i64, u64)]) -> Registry {
        let specs = entries
            .iter()
            .map(|&(pid, arrival, burst, _)| ProcessSpec::new(pid, arrival, burst))
            .collect();
        let mut registry = Registry::create(specs).unwrap();
        for (index, &(_, _, burst, completion)) in entries.iter().enumerate() {
            for _ in 0..burst {
                registry.run_unit(index);
            }
            registry.complete(index, completion);
        }
        registry
    }

    #[test]
    fn test_per_process_metrics() {
        let registry = completed_registry(&[("A", 0, 5, 9), ("B", 1, 3, 8)]);
        let report = StatisticsReport::compute(&registry).unwrap();

        let a = report.get("A").unwrap();
        assert_eq!((a.completion, a.tat, a.wt), (9, 9, 4));
        let b = report.get("B").unwrap();
        assert_eq!((b.completion, b.tat, b.wt), (8, 7, 4));
    }

    #[test]
    fn test_aggregates() {
        let registry = completed_registry(&[("A", 0, 2, 2), ("B", 5, 2, 7)]);
        let report = StatisticsReport::compute(&registry).unwrap();
        let agg = report.aggregates();

        assert_eq!(agg.makespan, 7);
        assert_eq!(agg.total_burst, 4);
        assert!((agg.avg_tat - 2.0).abs() < 1e-9);
        assert!((agg.avg_wt - 0.0).abs() < 1e-9);
        assert!((agg.cpu_utilization - 4.0 / 7.0).abs() < 1e-9);
        assert!((agg.throughput - 2.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::create(Vec::new()).unwrap();
        assert!(matches!(
            StatisticsReport::compute(&registry),
            Err(SchedError::EmptyInput)
        ));
    }

    #[test]
    fn test_incomplete_registry() {
        let registry = Registry::create(vec![ProcessSpec::new("A", 0, 2)]).unwrap();
        assert!(matches!(
            StatisticsReport::compute(&registry),
            Err(SchedError::SimulationIncomplete { completed: 0, total: 1 })
        ));
    }

    // ==================== Consistencia ====================

    #[test]
    fn test_negative_tat_is_flagged() {
        let registry = completed_registry(&[("A", 5, 1, 3)]);
        let err = StatisticsReport::compute(&registry).unwrap_err();
        assert!(matches!(err, SchedError::InternalConsistency(_)));
    }

    #[test]
    fn test_negative_wt_is_flagged() {
        let registry = completed_registry(&[("A", 0, 4, 2)]);
        let err = StatisticsReport::compute(&registry).unwrap_err();
        assert!(err.to_string().contains("shorter than burst"));
    }

    #[test]
    fn test_report_serialization() {
        let registry = completed_registry(&[("A", 0, 1, 1)]);
        let report = StatisticsReport::compute(&registry).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["processes"][0]["pid"], "A");
        assert_eq!(json["aggregates"]["makespan"], 1);
        assert_eq!(json["aggregates"]["cpu_utilization"], 1.0);
    }
}
