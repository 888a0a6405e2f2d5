//! Rotating-reference sweep tabulated as a polars `DataFrame`.
//!
//! Columns: `theta_deg`, `alpha`, `beta`, `sector`, `subsector`, `u`, `v`,
//! `t0` (share of the subsector origin). Rows outside every sector keep the
//! reference coordinates and null lookup columns.

use anyhow::{Context, Result};
use dualsvm::reference::rotating;
use dualsvm::Topology;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

pub fn sweep_frame(topo: &Topology, magnitude: f64, steps: usize) -> PolarsResult<DataFrame> {
    let samples = rotating(magnitude, steps);
    let mut theta = Vec::with_capacity(steps);
    let mut alpha = Vec::with_capacity(steps);
    let mut beta = Vec::with_capacity(steps);
    let mut sector: Vec<Option<u32>> = Vec::with_capacity(steps);
    let mut subsector: Vec<Option<u32>> = Vec::with_capacity(steps);
    let mut u: Vec<Option<f64>> = Vec::with_capacity(steps);
    let mut v: Vec<Option<f64>> = Vec::with_capacity(steps);
    let mut t0: Vec<Option<f64>> = Vec::with_capacity(steps);
    for (th, p) in samples {
        let hit = topo.locate(&p);
        theta.push(th.to_degrees());
        alpha.push(p.alpha);
        beta.push(p.beta);
        sector.push(hit.map(|h| h.sector as u32));
        subsector.push(hit.map(|h| h.subsector.index as u32));
        u.push(hit.map(|h| h.duty.u));
        v.push(hit.map(|h| h.duty.v));
        t0.push(hit.map(|h| h.duty.remainder()));
    }
    df!(
        "theta_deg" => theta,
        "alpha" => alpha,
        "beta" => beta,
        "sector" => sector,
        "subsector" => subsector,
        "u" => u,
        "v" => v,
        "t0" => t0
    )
}

pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
