//! # Planificador Round Robin
//! src/scheduler/round_robin.rs
//!
//! Simula Round Robin paso a paso sobre tiempo lógico. El planificador es
//! un `Iterator` finito y perezoso: cada llamada a `next()` procesa una
//! sola unidad de tiempo y emite su `TimelineEvent`. El consumidor decide
//! el ritmo (drenar de una vez para un reporte, o de a poco para animar).
//!
//! ## Algoritmo
//!
//! 1. En cada frontera de unidad se admiten, en orden del registro, los
//!    procesos pendientes con `arrival <= time`.
//! 2. Cola vacía y procesos sin terminar: la unidad es ociosa.
//! 3. Si no, se despacha la cabeza de la cola por `min(Q, remaining)`
//!    unidades. Las llegadas durante la porción quedan en la cola detrás
//!    de las ya encoladas, sin expropiar al proceso en curso.
//! 4. Al terminar la porción, el proceso vuelve al final de la cola (detrás
//!    de las llegadas de su propia porción) o se marca completado.
//!
//! El estado del registro nunca se adelanta al último evento emitido:
//! si el consumidor deja de iterar, el registro queda consistente.

use crate::error::{Result, SchedError};
use crate::process::{Process, ProcessState, Registry};
use crate::scheduler::event::TimelineEvent;
use crate::stats::StatisticsReport;
use log::{debug, info, trace};
use std::collections::VecDeque;

/// Porción de CPU asignada al proceso en ejecución
#[derive(Debug, Clone, Copy)]
struct Slice {
    /// Índice en el registro
    index: usize,

    /// Unidades que faltan de esta porción
    left: u64,
}

/// Valida el quantum (`Q >= 1`)
pub fn validate_quantum(quantum: i64) -> Result<u64> {
    if quantum < 1 {
        return Err(SchedError::invalid(format!(
            "quantum must be >= 1, got {}",
            quantum
        )));
    }
    Ok(quantum as u64)
}

/// Simulación Round Robin en curso
#[derive(Debug)]
pub struct RoundRobin {
    registry: Registry,
    quantum: u64,

    /// Cola de listos (índices al registro)
    queue: VecDeque<usize>,

    running: Option<Slice>,
    time: u64,
    completed: usize,
}

impl RoundRobin {
    /// Crea una simulación sobre un registro recién construido
    ///
    /// # Errores
    ///
    /// * `InvalidInput` si `quantum < 1`
    /// * `EmptyInput` si el registro no tiene procesos
    /// * `InvalidInput` si el registro ya pasó por otra simulación
    pub fn new(registry: Registry, quantum: i64) -> Result<Self> {
        let quantum = validate_quantum(quantum)?;
        if registry.is_empty() {
            return Err(SchedError::EmptyInput);
        }
        if !registry.is_fresh() {
            return Err(SchedError::invalid("registry was already used by a previous run"));
        }

        info!(
            "Round Robin: {} processes, quantum {}, total burst {}",
            registry.len(),
            quantum,
            registry.total_burst()
        );

        Ok(Self {
            queue: VecDeque::with_capacity(registry.len()),
            registry,
            quantum,
            running: None,
            time: 0,
            completed: 0,
        })
    }

    pub fn quantum(&self) -> u64 {
        self.quantum
    }

    /// Tiempo lógico actual (inicio de la próxima unidad)
    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn into_registry(self) -> Registry {
        self.registry
    }

    /// `true` cuando todos los procesos terminaron
    pub fn is_finished(&self) -> bool {
        self.completed == self.registry.len()
    }

    /// PIDs en la cola de listos, en orden FIFO
    pub fn ready_queue(&self) -> Vec<&str> {
        self.queue
            .iter()
            .filter_map(|&i| self.registry.get(i).map(Process::pid))
            .collect()
    }

    /// PID del proceso que tiene la CPU a mitad de porción
    pub fn running(&self) -> Option<&str> {
        self.running
            .and_then(|slice| self.registry.get(slice.index))
            .map(Process::pid)
    }

    /// Calcula el reporte final
    ///
    /// # Errores
    ///
    /// `SimulationIncomplete` si la línea de tiempo no se consumió entera.
    pub fn report(&self) -> Result<StatisticsReport> {
        if !self.is_finished() {
            return Err(SchedError::SimulationIncomplete {
                completed: self.completed,
                total: self.registry.len(),
            });
        }
        StatisticsReport::compute(&self.registry)
    }

    /// Admite los procesos pendientes que ya llegaron
    fn admit(&mut self) {
        for index in 0..self.registry.len() {
            let p = &self.registry.all()[index];
            if p.state() == ProcessState::Pending && p.arrival() <= self.time {
                trace!("t={} admit {}", self.time, p.pid());
                self.registry.set_state(index, ProcessState::Ready);
                self.queue.push_back(index);
            }
        }
    }

    fn ready_pids(&self) -> Vec<String> {
        self.ready_queue().into_iter().map(str::to_string).collect()
    }

    fn dispatch(&mut self, index: usize) -> Slice {
        self.registry.set_state(index, ProcessState::Running);
        let p = &self.registry.all()[index];
        let left = self.quantum.min(p.remaining());
        debug!("t={} dispatch {} for {} units", self.time, p.pid(), left);
        Slice { index, left }
    }

    fn idle_unit(&mut self) -> TimelineEvent {
        debug!("t={} idle", self.time);
        let event = TimelineEvent::idle(self.time);
        self.time += 1;
        event
    }

    fn end_slice(&mut self, index: usize) {
        if self.registry.all()[index].remaining() > 0 {
            self.registry.set_state(index, ProcessState::Ready);
            self.queue.push_back(index);
        } else {
            self.registry.complete(index, self.time);
            self.completed += 1;
            debug!(
                "t={} {} completed ({}/{})",
                self.time,
                self.registry.all()[index].pid(),
                self.completed,
                self.registry.len()
            );
            if self.is_finished() {
                info!("Round Robin finished at t={}", self.time);
            }
        }
    }
}

impl Iterator for RoundRobin {
    type Item = TimelineEvent;

    fn next(&mut self) -> Option<TimelineEvent> {
        if self.is_finished() {
            return None;
        }

        let mut slice = match self.running.take() {
            Some(slice) => slice,
            None => {
                self.admit();
                match self.queue.pop_front() {
                    Some(index) => self.dispatch(index),
                    None => return Some(self.idle_unit()),
                }
            }
        };

        let pid = self.registry.all()[slice.index].pid().to_string();
        let event = TimelineEvent::run(self.time, pid, self.ready_pids());

        self.time += 1;
        self.registry.run_unit(slice.index);
        slice.left -= 1;

        // Llegadas a mitad de porción: quedan listas para el próximo despacho
        self.admit();

        if slice.left == 0 {
            self.end_slice(slice.index);
        } else {
            self.running = Some(slice);
        }

        Some(event)
    }
}

impl std::iter::FusedIterator for RoundRobin {}
