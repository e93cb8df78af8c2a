//! # Eventos de la línea de tiempo
//! src/scheduler/event.rs
//!
//! Un evento por unidad lógica de tiempo: qué proceso usó la CPU (o
//! `None` si estuvo ociosa) y el contenido de la cola de listos al
//! inicio de esa unidad.

use serde::Serialize;

/// Evento de una unidad de tiempo
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    /// Inicio de la unidad
    pub time: u64,

    /// Proceso que corrió, `None` = CPU ociosa
    pub pid: Option<String>,

    /// PIDs en la cola de listos (sin el que corre), en orden FIFO
    pub ready: Vec<String>,
}

impl TimelineEvent {
    pub fn run(time: u64, pid: impl Into<String>, ready: Vec<String>) -> Self {
        Self {
            time,
            pid: Some(pid.into()),
            ready,
        }
    }

    pub fn idle(time: u64) -> Self {
        Self {
            time,
            pid: None,
            ready: Vec::new(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.pid.is_none()
    }

    /// Etiqueta para mostrar (pid o "Idle")
    pub fn label(&self) -> &str {
        self.pid.as_deref().unwrap_or("Idle")
    }
}
