//! # RR Scheduler - Entry Point
//! src/main.rs
//!
//! Punto de entrada del simulador Round Robin.

use rr_scheduler::config::{Config, OutputFormat};
use rr_scheduler::input::{check_horizon, parse_process_specs, Workload};
use rr_scheduler::process::ProcessSpec;
use rr_scheduler::render::{self, IDLE_COLOR, UNIT_WIDTH};
use rr_scheduler::scheduler::{simulate, Simulation};
use std::collections::BTreeMap;

fn main() {
    let config = Config::new();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter()),
    )
    .init();

    if let Err(e) = run(&config) {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;

    let (specs, quantum) = load(config)?;
    let sim = simulate(specs, quantum)?;

    match config.format {
        OutputFormat::Table => print_table(config, quantum, &sim),
        OutputFormat::Json => print_json(config, &sim)?,
    }

    Ok(())
}

/// Obtiene los procesos y el quantum efectivo
fn load(config: &Config) -> rr_scheduler::Result<(Vec<ProcessSpec>, i64)> {
    let (specs, quantum) = read_specs(config)?;
    check_horizon(&specs)?;
    Ok((specs, quantum))
}

fn read_specs(config: &Config) -> rr_scheduler::Result<(Vec<ProcessSpec>, i64)> {
    match &config.input {
        Some(path) => {
            let workload = Workload::from_file(path)?;
            let quantum = config.effective_quantum(workload.quantum);
            Ok((workload.processes, quantum))
        }
        None => {
            let specs = parse_process_specs(&config.processes)?;
            Ok((specs, config.effective_quantum(None)))
        }
    }
}

fn colors(config: &Config, sim: &Simulation) -> BTreeMap<String, String> {
    render::palette(
        sim.report.processes().iter().map(|p| p.pid.as_str()),
        config.color_seed,
    )
}

fn print_table(config: &Config, quantum: i64, sim: &Simulation) {
    println!("=================================");
    println!("  Round Robin Scheduler");
    println!("  Principios de Sistemas Operativos");
    println!("=================================\n");

    config.print_summary(quantum, sim.report.processes().len());

    if !config.no_gantt {
        println!("📊 Gantt:");
        println!("{}", render::render_gantt(&sim.timeline, UNIT_WIDTH));
        println!();
        println!("🎨 {}  Idle: {}", render::render_legend(&colors(config, sim)), IDLE_COLOR);
        println!();
    }

    println!("{}", render::render_report(&sim.report));
}

fn print_json(config: &Config, sim: &Simulation) -> serde_json::Result<()> {
    let output = serde_json::json!({
        "quantum": sim.quantum,
        "timeline": sim.timeline,
        "report": sim.report,
        "colors": colors(config, sim),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
