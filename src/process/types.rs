//! # Tipos de Procesos
//! src/process/types.rs
//!
//! Define la entrada cruda de un proceso (`ProcessSpec`) y su estado
//! dentro del registro (`Process`).

use serde::{Deserialize, Serialize};

/// Entrada de un proceso tal como la entrega el llamador
///
/// Los campos numéricos son `i64` para poder rechazar valores negativos
/// con un error claro en vez de fallar al deserializar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub pid: String,
    pub arrival: i64,
    pub burst: i64,
}

impl ProcessSpec {
    pub fn new(pid: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival,
            burst,
        }
    }
}

/// Estado de un proceso en el ciclo de vida de la simulación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessState {
    /// Todavía no llegó
    Pending,

    /// En la cola de listos
    Ready,

    /// Usando la CPU
    Running,

    /// Terminó (remaining == 0)
    Completed,
}

/// Proceso registrado
///
/// `remaining` y `completion` solo cambian a través del planificador.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    pid: String,
    arrival: u64,
    burst: u64,
    remaining: u64,
    completion: Option<u64>,
    #[serde(skip)]
    state: ProcessState,
}

impl Process {
    pub(crate) fn new(pid: String, arrival: u64, burst: u64) -> Self {
        Self {
            pid,
            arrival,
            burst,
            remaining: burst,
            completion: None,
            state: ProcessState::Pending,
        }
    }

    pub fn pid(&self) -> &str {
        &self.pid
    }

    pub fn arrival(&self) -> u64 {
        self.arrival
    }

    pub fn burst(&self) -> u64 {
        self.burst
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Tiempo de finalización (None hasta que `remaining` llega a 0)
    pub fn completion(&self) -> Option<u64> {
        self.completion
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == ProcessState::Completed
    }

    pub(crate) fn set_state(&mut self, state: ProcessState) {
        self.state = state;
    }

    /// Ejecuta una unidad de tiempo
    pub(crate) fn run_unit(&mut self) {
        debug_assert!(self.remaining > 0, "run_unit on finished process");
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Marca el proceso como completado en `time`
    pub(crate) fn complete(&mut self, time: u64) {
        debug_assert!(self.remaining == 0 && self.completion.is_none());
        self.completion = Some(time);
        self.state = ProcessState::Completed;
    }
}
