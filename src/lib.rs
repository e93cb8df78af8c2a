//! # RR Scheduler
//! src/lib.rs
//!
//! Simulador de planificación de CPU con Round Robin: dado un conjunto de
//! procesos (llegada, ráfaga) y un quantum, calcula de forma determinista
//! la línea de tiempo de ejecución, los tiempos de finalización y las
//! métricas derivadas (TAT, WT, utilización de CPU, throughput).
//!
//! ## Arquitectura
//!
//! - `process`: Registro de procesos (entrada inmutable + estado de corrida)
//! - `scheduler`: Motor Round Robin como iterador perezoso de eventos
//! - `stats`: Reporte final de métricas
//! - `input`: Carga de procesos desde CLI o JSON
//! - `render`: Diagrama de Gantt, tabla de resultados y colores
//! - `config`: Configuración CLI / variables de entorno
//! - `error`: Taxonomía de errores
//!
//! ## Ejemplo de uso
//!
//! ```
//! use rr_scheduler::process::{ProcessSpec, Registry};
//! use rr_scheduler::scheduler::RoundRobin;
//!
//! let registry = Registry::create(vec![
//!     ProcessSpec::new("A", 0, 3),
//!     ProcessSpec::new("B", 1, 2),
//! ]).unwrap();
//!
//! let mut rr = RoundRobin::new(registry, 2).unwrap();
//! for event in rr.by_ref() {
//!     println!("t={} {}", event.time, event.label());
//! }
//! let report = rr.report().unwrap();
//! assert_eq!(report.makespan(), 5);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod process;
pub mod render;
pub mod scheduler;
pub mod stats;

pub use error::{Result, SchedError};
