//! JSON views and text tables over a built topology.

use dualsvm::encoder::{differential, format_thirds, thirds};
use dualsvm::topology::{Topology, VertexId};
use dualsvm::{PlanePoint, SwitchState};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VertexView {
    pub id: usize,
    pub label: String,
    pub kind: String,
    pub alpha: f64,
    pub beta: f64,
    /// `(u, v, w)` as reduced fractions.
    pub uvw: [String; 3],
    pub states: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct SubsectorView {
    pub index: usize,
    pub vertices: [String; 3],
    pub determinant: f64,
}

#[derive(Debug, Serialize)]
pub struct SectorView {
    pub index: usize,
    pub lower_deg: f64,
    pub upper_deg: f64,
    pub footprint: [String; 3],
    pub subsectors: Vec<SubsectorView>,
}

#[derive(Debug, Serialize)]
pub struct CatalogView {
    pub version: &'static str,
    pub vertices: Vec<VertexView>,
    pub sectors: Vec<SectorView>,
}

#[derive(Debug, Serialize)]
pub struct DwellView {
    pub vertex: String,
    pub states: Vec<usize>,
    pub duration: f64,
}

#[derive(Debug, Serialize)]
pub struct LocateView {
    pub alpha: f64,
    pub beta: f64,
    pub found: bool,
    pub sector: Option<usize>,
    pub subsector: Option<usize>,
    pub u: Option<f64>,
    pub v: Option<f64>,
    pub dwell: Vec<DwellView>,
}

fn label(topo: &Topology, id: VertexId) -> String {
    topo.vertex(id)
        .map(|v| v.label.clone())
        .unwrap_or_else(|| format!("#{}", id.0))
}

fn labels(topo: &Topology, ids: [VertexId; 3]) -> [String; 3] {
    ids.map(|id| label(topo, id))
}

pub fn catalog_view(topo: &Topology) -> CatalogView {
    let vertices = topo
        .vertices()
        .iter()
        .map(|v| VertexView {
            id: v.id.0,
            label: v.label.clone(),
            kind: v.kind.to_string(),
            alpha: v.point.alpha,
            beta: v.point.beta,
            uvw: thirds(&v.differential).map(format_thirds),
            states: v.states.iter().map(|s| s.index()).collect(),
        })
        .collect();
    let sectors = topo
        .sectors()
        .iter()
        .map(|s| SectorView {
            index: s.index,
            lower_deg: s.lower_angle.to_degrees(),
            upper_deg: s.upper_angle.to_degrees(),
            footprint: labels(topo, s.footprint),
            subsectors: s
                .subsectors
                .iter()
                .map(|sub| SubsectorView {
                    index: sub.index,
                    vertices: labels(topo, sub.vertices),
                    determinant: sub.space.determinant(),
                })
                .collect(),
        })
        .collect();
    CatalogView {
        version: dualsvm::VERSION,
        vertices,
        sectors,
    }
}

pub fn locate_view(topo: &Topology, point: PlanePoint, period: f64) -> LocateView {
    let mut view = LocateView {
        alpha: point.alpha,
        beta: point.beta,
        found: false,
        sector: None,
        subsector: None,
        u: None,
        v: None,
        dwell: Vec::new(),
    };
    let Some(hit) = topo.locate(&point) else {
        tracing::info!(alpha = point.alpha, beta = point.beta, "outside all sectors");
        return view;
    };
    view.found = true;
    view.sector = Some(hit.sector);
    view.subsector = Some(hit.subsector.index);
    view.u = Some(hit.duty.u);
    view.v = Some(hit.duty.v);
    view.dwell = topo
        .dwell_times(&hit, period)
        .into_iter()
        .flatten()
        .map(|d| DwellView {
            vertex: d.vertex.label.clone(),
            states: d.vertex.states.iter().map(|s| s.index()).collect(),
            duration: d.duration,
        })
        .collect();
    view
}

/// One header line plus one line per state: gates, `(u, v, w)` in thirds, vertex label.
pub fn state_table(topo: &Topology) -> Vec<String> {
    let mut lines = Vec::with_capacity(65);
    lines.push(format!(
        "{:>3}  {:<20} {:>5} {:>5} {:>5}  {}",
        "#", "(U1,V1,W1)(U2,V2,W2)", "U", "V", "W", "vertex"
    ));
    for s in SwitchState::all() {
        let [u, v, w] = thirds(&differential(&s)).map(format_thirds);
        let vertex = topo
            .vertex_of_state(&s)
            .map(|vx| vx.label.as_str())
            .unwrap_or("-");
        lines.push(format!(
            "{:>3}  {:<20} {:>5} {:>5} {:>5}  {}",
            s.index(),
            s.to_string(),
            u,
            v,
            w,
            vertex
        ));
    }
    lines
}
