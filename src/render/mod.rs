//! # Presentación en texto
//! src/render/mod.rs
//!
//! Consumidores de la salida del motor: diagrama de Gantt, tabla de
//! resultados y colores por pid. El motor no depende de este módulo.

pub mod color;
pub mod gantt;
pub mod table;

pub use color::{color_for, palette, IDLE_COLOR};
pub use gantt::{render_gantt, time_labels, UNIT_WIDTH};
pub use table::{averages_line, render_legend, render_report};
