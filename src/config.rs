//! # Configuración del Simulador
//! src/config.rs
//!
//! Configuración de una corrida con soporte para argumentos CLI y
//! variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./rr_scheduler -q 2 -p A:0:5 -p B:1:3 -p C:2:1
//! ./rr_scheduler --input workload.json --format json
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! RR_QUANTUM=3 RR_INPUT=workload.json ./rr_scheduler
//! ```

use clap::{Parser, ValueEnum};

/// Quantum usado si no viene ni por CLI ni en el archivo
pub const DEFAULT_QUANTUM: i64 = 2;

/// Formato de salida
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Diagrama de Gantt + tabla de resultados
    Table,

    /// Línea de tiempo y reporte en JSON
    Json,
}

/// Configuración del simulador Round Robin
#[derive(Debug, Clone, Parser)]
#[command(name = "rr_scheduler")]
#[command(about = "Simulador de planificación Round Robin para Principios de Sistemas Operativos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Quantum de tiempo (unidades lógicas por despacho)
    #[arg(short, long, env = "RR_QUANTUM", allow_negative_numbers = true)]
    pub quantum: Option<i64>,

    /// Proceso en formato PID:ARRIVAL:BURST o ARRIVAL:BURST (repetible)
    #[arg(short, long = "process", value_name = "SPEC", allow_hyphen_values = true)]
    pub processes: Vec<String>,

    /// Archivo JSON con la carga de trabajo
    #[arg(short, long, env = "RR_INPUT")]
    pub input: Option<String>,

    /// Formato de salida
    #[arg(long, value_enum, default_value = "table", env = "RR_FORMAT")]
    pub format: OutputFormat,

    /// No dibujar el diagrama de Gantt
    #[arg(long = "no-gantt")]
    pub no_gantt: bool,

    /// Semilla para los colores de los procesos
    #[arg(long = "color-seed", default_value = "0", env = "RR_COLOR_SEED")]
    pub color_seed: u64,

    /// Verbosidad del log (-v debug, -vv trace); RUST_LOG tiene prioridad
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Valida la configuración
    ///
    /// Retorna errores si no hay fuente de procesos o si hay dos
    pub fn validate(&self) -> Result<(), String> {
        match (self.processes.is_empty(), self.input.is_some()) {
            (true, false) => Err("No processes given: use --process or --input".to_string()),
            (false, true) => Err("Use either --process or --input, not both".to_string()),
            _ => Ok(()),
        }
    }

    /// Quantum efectivo: CLI/env, luego el del archivo, luego el default
    pub fn effective_quantum(&self, from_file: Option<i64>) -> i64 {
        self.quantum.or(from_file).unwrap_or(DEFAULT_QUANTUM)
    }

    /// Filtro de log derivado de `--verbose`
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self, quantum: i64, process_count: usize) {
        println!("⚙️  Configuración:");
        println!("   Quantum:    {}", quantum);
        println!("   Procesos:   {}", process_count);
        match &self.input {
            Some(path) => println!("   Entrada:    {}", path),
            None => println!("   Entrada:    --process"),
        }
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            quantum: None,
            processes: Vec::new(),
            input: None,
            format: OutputFormat::Table,
            no_gantt: false,
            color_seed: 0,
            verbose: 0,
        }
    }
}
