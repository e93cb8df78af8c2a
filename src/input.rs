//! # Carga de Procesos
//! src/input.rs
//!
//! Convierte la entrada del usuario en una lista de `ProcessSpec`.
//!
//! ## Formatos soportados
//!
//! ### CLI (`--process`)
//! ```text
//! A:0:5      pid explícito, llegada 0, ráfaga 5
//! 1:3        pid automático según posición (A, B, ...)
//! ```
//!
//! ### Archivo JSON (`--input`)
//! ```json
//! {"quantum": 2, "processes": [{"pid": "A", "arrival": 0, "burst": 5}]}
//! ```
//! o un arreglo de procesos sin envoltorio. El `pid` es opcional.

use crate::error::{Result, SchedError};
use crate::process::{process_label, ProcessSpec};
use regex::Regex;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::OnceLock;

/// Proceso tal como viene en el archivo (pid opcional)
#[derive(Debug, Clone, Deserialize)]
struct RawProcess {
    #[serde(default)]
    pid: Option<String>,
    arrival: i64,
    burst: i64,
}

/// Archivo de carga: con o sin envoltorio
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawWorkload {
    Wrapped {
        #[serde(default)]
        quantum: Option<i64>,
        processes: Vec<RawProcess>,
    },
    Bare(Vec<RawProcess>),
}

/// Carga de trabajo leída de un archivo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    /// Quantum del archivo, si lo trae
    pub quantum: Option<i64>,
    pub processes: Vec<ProcessSpec>,
}

impl Workload {
    /// Parsea una carga desde texto JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawWorkload = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Lee una carga desde un archivo JSON
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let raw: RawWorkload = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawWorkload) -> Self {
        let (quantum, processes) = match raw {
            RawWorkload::Wrapped { quantum, processes } => (quantum, processes),
            RawWorkload::Bare(processes) => (None, processes),
        };

        let processes = processes
            .into_iter()
            .enumerate()
            .map(|(index, p)| ProcessSpec {
                pid: p.pid.unwrap_or_else(|| process_label(index)),
                arrival: p.arrival,
                burst: p.burst,
            })
            .collect();

        Self { quantum, processes }
    }
}

/// Horizonte máximo de tiempo lógico aceptado desde la CLI o un archivo
///
/// La simulación emite un evento por unidad, así que una llegada enorme
/// se traduce en igual cantidad de unidades ociosas en memoria.
pub const MAX_HORIZON: i64 = 1_000_000;

/// Verifica que `max(arrival) + sum(burst)` no supere `MAX_HORIZON`
///
/// Es una cota superior del makespan. Valores negativos se ignoran acá
/// (los rechaza el registro).
pub fn check_horizon(specs: &[ProcessSpec]) -> Result<()> {
    let last_arrival = specs.iter().map(|s| s.arrival.max(0)).max().unwrap_or(0);
    let total_burst = specs
        .iter()
        .fold(0i64, |acc, s| acc.saturating_add(s.burst.max(0)));
    let horizon = last_arrival.saturating_add(total_burst);

    if horizon > MAX_HORIZON {
        return Err(SchedError::invalid(format!(
            "workload spans up to {} time units (limit {})",
            horizon, MAX_HORIZON
        )));
    }
    Ok(())
}

fn spec_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?:([^:\s]+)\s*:)?\s*(-?\d+)\s*:\s*(-?\d+)\s*$")
            .expect("process spec regex is valid")
    })
}

/// Parsea un proceso en formato `PID:ARRIVAL:BURST` o `ARRIVAL:BURST`
///
/// `index` es la posición del proceso, usada para el pid automático.
/// Los rangos (llegada >= 0, ráfaga >= 1) los valida el registro.
pub fn parse_process_spec(s: &str, index: usize) -> Result<ProcessSpec> {
    let caps = spec_regex().captures(s).ok_or_else(|| {
        SchedError::invalid(format!(
            "malformed process '{}' (expected PID:ARRIVAL:BURST or ARRIVAL:BURST)",
            s
        ))
    })?;

    let pid = caps
        .get(1)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| process_label(index));

    let arrival = caps[2]
        .parse::<i64>()
        .map_err(|e| SchedError::invalid(format!("arrival in '{}': {}", s, e)))?;
    let burst = caps[3]
        .parse::<i64>()
        .map_err(|e| SchedError::invalid(format!("burst in '{}': {}", s, e)))?;

    Ok(ProcessSpec::new(pid, arrival, burst))
}

/// Parsea todos los `--process` en orden
pub fn parse_process_specs<S: AsRef<str>>(items: &[S]) -> Result<Vec<ProcessSpec>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_process_spec(item.as_ref(), index))
        .collect()
}
