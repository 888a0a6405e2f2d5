mod provenance;
mod report;
mod sweep;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dualsvm::{PlanePoint, Topology};
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "dualsvm")]
#[command(about = "Sector lookup and duty ratios for the dual-inverter SVM plane")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print all 64 switch states with their phase differentials
    States,
    /// Dump vertices, sectors and subsectors as JSON
    Catalog,
    /// Locate one reference point; prints duty ratios and dwell times as JSON
    Locate {
        #[arg(long, allow_hyphen_values = true)]
        alpha: f64,
        #[arg(long, allow_hyphen_values = true)]
        beta: f64,
        /// Switching period used to scale dwell times
        #[arg(long, default_value_t = 1.0)]
        period: f64,
    },
    /// Tabulate a rotating reference, write CSV and a provenance sidecar
    Sweep {
        #[arg(long)]
        magnitude: f64,
        #[arg(long, default_value_t = 360)]
        steps: usize,
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::States => states(),
        Action::Catalog => catalog(),
        Action::Locate {
            alpha,
            beta,
            period,
        } => locate(alpha, beta, period),
        Action::Sweep {
            magnitude,
            steps,
            out,
        } => sweep(magnitude, steps, out),
    }
}

fn topology() -> Result<Topology> {
    Topology::dual_inverter().context("building dual-inverter topology")
}

fn states() -> Result<()> {
    let topo = topology()?;
    for line in report::state_table(&topo) {
        println!("{line}");
    }
    Ok(())
}

fn catalog() -> Result<()> {
    let topo = topology()?;
    tracing::info!(
        vertices = topo.vertices().len(),
        sectors = topo.sectors().len(),
        "catalog"
    );
    let view = report::catalog_view(&topo);
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn locate(alpha: f64, beta: f64, period: f64) -> Result<()> {
    tracing::info!(alpha, beta, period, "locate");
    let topo = topology()?;
    let view = report::locate_view(&topo, PlanePoint::new(alpha, beta), period);
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn sweep(magnitude: f64, steps: usize, out: String) -> Result<()> {
    tracing::info!(magnitude, steps, out, "sweep");
    let topo = topology()?;
    let mut df = sweep::sweep_frame(&topo, magnitude, steps)?;
    let missed = df.column("sector")?.null_count();
    tracing::info!(rows = df.height(), missed, "sweep_table");
    sweep::write_csv(&mut df, Path::new(&out))?;

    let payload = provenance::Payload::new(
        "sweep",
        json!({
            "magnitude": magnitude,
            "steps": steps,
            "rows": df.height(),
            "missed": missed,
        }),
    );
    let prov = provenance::write_sidecar(&out, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}
