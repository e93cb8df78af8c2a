//! # Errores del Simulador
//! src/error.rs
//!
//! Taxonomía de errores del motor de planificación:
//! - `InvalidInput`: entrada malformada (pid vacío o repetido, llegada
//!   negativa, ráfaga no positiva, quantum no positivo)
//! - `EmptyInput`: no hay procesos que planificar
//! - `InternalConsistency`: métricas negativas (defecto del planificador)
//!
//! Todos se reportan de forma síncrona y ninguno se reintenta: la
//! simulación es determinista, reintentar reproduce el mismo error.

use thiserror::Error;

/// Errores que puede producir el simulador
#[derive(Debug, Error)]
pub enum SchedError {
    /// Entrada inválida, detectada antes de simular cualquier paso
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Lista de procesos vacía
    #[error("Empty input: no processes to schedule")]
    EmptyInput,

    /// TAT o WT negativo
    #[error("Internal consistency failure: {0}")]
    InternalConsistency(String),

    /// Se pidió el reporte antes de consumir toda la línea de tiempo
    #[error("Simulation incomplete: {completed}/{total} processes completed")]
    SimulationIncomplete { completed: usize, total: usize },

    /// Error leyendo un archivo de carga
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parseando JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchedError {
    /// Atajo para construir un `InvalidInput`
    pub fn invalid(msg: impl Into<String>) -> Self {
        SchedError::InvalidInput(msg.into())
    }
}

/// Resultado con el error del simulador
pub type Result<T> = std::result::Result<T, SchedError>;
