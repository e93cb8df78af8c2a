//! # Procesos
//! src/process/mod.rs
//!
//! Registro de procesos de una simulación y generación de etiquetas.

pub mod label;
pub mod registry;
pub mod types;

pub use label::process_label;
pub use registry::Registry;
pub use types::{Process, ProcessSpec, ProcessState};
