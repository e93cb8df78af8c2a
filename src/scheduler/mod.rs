//! # Planificador
//! src/scheduler/mod.rs
//!
//! Motor de simulación Round Robin y sus eventos.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use rr_scheduler::process::ProcessSpec;
//! use rr_scheduler::scheduler::simulate;
//!
//! let specs = vec![ProcessSpec::new("A", 0, 5)];
//! let sim = simulate(specs, 2).unwrap();
//! assert_eq!(sim.report.makespan(), 5);
//! ```

pub mod event;
pub mod round_robin;

pub use event::TimelineEvent;
pub use round_robin::{validate_quantum, RoundRobin};

use crate::error::{Result, SchedError};
use crate::process::{ProcessSpec, Registry};
use crate::stats::StatisticsReport;
use serde::Serialize;

/// Resultado completo de una corrida
#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    pub quantum: u64,
    pub timeline: Vec<TimelineEvent>,
    pub report: StatisticsReport,
}

/// Corre una simulación completa sobre un registro nuevo
///
/// Valida el quantum, luego que haya procesos, luego cada entrada.
pub fn simulate(specs: Vec<ProcessSpec>, quantum: i64) -> Result<Simulation> {
    validate_quantum(quantum)?;
    if specs.is_empty() {
        return Err(SchedError::EmptyInput);
    }

    let registry = Registry::create(specs)?;
    let mut rr = RoundRobin::new(registry, quantum)?;
    let timeline: Vec<TimelineEvent> = rr.by_ref().collect();
    let report = rr.report()?;

    Ok(Simulation {
        quantum: rr.quantum(),
        timeline,
        report,
    })
}
