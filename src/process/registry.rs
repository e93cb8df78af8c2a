//! # Registro de Procesos
//! src/process/registry.rs
//!
//! Guarda la entrada inmutable (pid, llegada, ráfaga) y el estado mutable
//! (`remaining`, `completion`) de cada proceso, en el orden de entrada.
//!
//! Se construye uno nuevo por simulación; nunca se reutiliza entre
//! corridas. Solo el planificador muta su estado (métodos `pub(crate)`).

use crate::error::{Result, SchedError};
use crate::process::types::{Process, ProcessSpec, ProcessState};
use std::collections::HashSet;

/// Registro de procesos de una corrida
#[derive(Debug, Clone)]
pub struct Registry {
    processes: Vec<Process>,
}

impl Registry {
    /// Valida la entrada y crea el registro
    ///
    /// # Errores
    ///
    /// `InvalidInput` si algún pid está vacío o repetido, alguna llegada
    /// es negativa o alguna ráfaga es menor que 1. Se reporta la primera
    /// entrada inválida en orden de entrada. Los pids se guardan tal como
    /// vienen (sin recortar espacios).
    pub fn create(entries: Vec<ProcessSpec>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        let mut processes = Vec::with_capacity(entries.len());

        for (index, entry) in entries.into_iter().enumerate() {
            let pid = entry.pid;

            if pid.trim().is_empty() {
                return Err(SchedError::invalid(format!(
                    "process #{} has an empty pid",
                    index
                )));
            }
            if entry.arrival < 0 {
                return Err(SchedError::invalid(format!(
                    "process {} has negative arrival time {}",
                    pid, entry.arrival
                )));
            }
            if entry.burst < 1 {
                return Err(SchedError::invalid(format!(
                    "process {} has burst time {} (must be >= 1)",
                    pid, entry.burst
                )));
            }
            if !seen.insert(pid.clone()) {
                return Err(SchedError::invalid(format!("duplicate pid {}", pid)));
            }

            processes.push(Process::new(pid, entry.arrival as u64, entry.burst as u64));
        }

        Ok(Self { processes })
    }

    /// Todos los procesos, en orden de entrada
    pub fn all(&self) -> &[Process] {
        &self.processes
    }

    pub fn get(&self, index: usize) -> Option<&Process> {
        self.processes.get(index)
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Suma de todas las ráfagas
    pub fn total_burst(&self) -> u64 {
        self.processes.iter().map(Process::burst).sum()
    }

    /// `true` si ninguna simulación tocó el registro todavía
    pub fn is_fresh(&self) -> bool {
        self.processes.iter().all(|p| {
            p.state() == ProcessState::Pending
                && p.remaining() == p.burst()
                && p.completion().is_none()
        })
    }

    pub fn completed_count(&self) -> usize {
        self.processes.iter().filter(|p| p.is_completed()).count()
    }

    pub(crate) fn set_state(&mut self, index: usize, state: ProcessState) {
        self.processes[index].set_state(state);
    }

    /// Descuenta una unidad de CPU al proceso `index`
    pub(crate) fn run_unit(&mut self, index: usize) {
        self.processes[index].run_unit();
    }

    /// Fija el tiempo de finalización del proceso `index`
    pub(crate) fn complete(&mut self, index: usize, time: u64) {
        self.processes[index].complete(time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new("A", 0, 5),
            ProcessSpec::new("B", 1, 3),
            ProcessSpec::new("C", 2, 1),
        ]
    }

    // ==================== Creación ====================

    #[test]
    fn test_create_keeps_input_order() {
        let registry = Registry::create(specs()).unwrap();
        let pids: Vec<&str> = registry.all().iter().map(|p| p.pid()).collect();
        assert_eq!(pids, vec!["A", "B", "C"]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.total_burst(), 9);
    }

    #[test]
    fn test_create_initializes_run_state() {
        let registry = Registry::create(specs()).unwrap();
        for p in registry.all() {
            assert_eq!(p.remaining(), p.burst());
            assert_eq!(p.completion(), None);
        }
        assert_eq!(registry.completed_count(), 0);
    }

    #[test]
    fn test_create_empty_is_allowed() {
        let registry = Registry::create(Vec::new()).unwrap();
        assert!(registry.is_empty());
    }

    // ==================== Validación ====================

    #[test]
    fn test_rejects_empty_pid() {
        let err = Registry::create(vec![ProcessSpec::new("  ", 0, 1)]).unwrap_err();
        assert!(matches!(err, SchedError::InvalidInput(_)));
        assert!(err.to_string().contains("empty pid"));
    }

    #[test]
    fn test_rejects_negative_arrival() {
        let err = Registry::create(vec![ProcessSpec::new("A", -1, 1)]).unwrap_err();
        assert!(err.to_string().contains("negative arrival"));
    }

    #[test]
    fn test_rejects_zero_burst() {
        let err = Registry::create(vec![ProcessSpec::new("A", 0, 0)]).unwrap_err();
        assert!(err.to_string().contains("burst"));
    }

    #[test]
    fn test_pid_is_kept_verbatim() {
        let registry = Registry::create(vec![
            ProcessSpec::new("A", 0, 1),
            ProcessSpec::new("A ", 0, 1),
            ProcessSpec::new(" A ", 0, 1),
        ])
        .unwrap();
        let pids: Vec<&str> = registry.all().iter().map(|p| p.pid()).collect();
        assert_eq!(pids, vec!["A", "A ", " A "]);
    }

    #[test]
    fn test_rejects_duplicate_pid() {
        let err = Registry::create(vec![
            ProcessSpec::new("A", 0, 1),
            ProcessSpec::new("A", 2, 3),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate pid A"));
    }

    #[test]
    fn test_reports_first_invalid_entry() {
        let err = Registry::create(vec![
            ProcessSpec::new("A", 0, 1),
            ProcessSpec::new("B", 0, -4),
            ProcessSpec::new("", 0, 1),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("process B"));
    }

    #[test]
    fn test_fresh_registry() {
        let mut registry = Registry::create(specs()).unwrap();
        assert!(registry.is_fresh());
        registry.set_state(1, ProcessState::Ready);
        assert!(!registry.is_fresh());
    }

    #[test]
    fn test_run_unit_makes_registry_stale() {
        let mut registry = Registry::create(specs()).unwrap();
        registry.run_unit(0);
        assert!(!registry.is_fresh());
    }

    // ==================== Mutación ====================

    #[test]
    fn test_run_and_complete() {
        let mut registry = Registry::create(vec![ProcessSpec::new("A", 0, 1)]).unwrap();
        registry.run_unit(0);
        registry.complete(0, 1);
        assert_eq!(registry.get(0).unwrap().completion(), Some(1));
        assert_eq!(registry.completed_count(), 1);
    }
}
