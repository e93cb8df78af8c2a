//! # Estadísticas
//! src/stats/mod.rs
//!
//! Cálculo del reporte final de una simulación.

pub mod report;

pub use report::{Aggregates, ProcessStats, StatisticsReport};
