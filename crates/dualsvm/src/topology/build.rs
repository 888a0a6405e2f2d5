//! Topology construction and build-time invariant checks.

use std::collections::HashMap;
use std::f64::consts::TAU;

use crate::algebra::PlanePoint;
use crate::cfg::SvmCfg;
use crate::encoder::differential;
use crate::solver::{Basis, Space};
use crate::state::SwitchState;
use crate::transform::{state_point, to_plane};

use super::catalog::{Catalog, VertexKind};
use super::types::{Sector, Subsector, Topology, Vertex, VertexId};
use super::TopologyError;

/// Hexagon wedges.
pub const SECTOR_COUNT: usize = 6;

/// Check the reflection invariant over the whole state space:
/// the complement of every state lands on the reflected plane point.
pub fn check_state_symmetry(cfg: &SvmCfg) -> Result<(), TopologyError> {
    for state in SwitchState::all() {
        let point = state_point(&state);
        let mirrored = state_point(&state.complement());
        check_mirror(state, point, mirrored, cfg.eps_sym)?;
    }
    Ok(())
}

/// `mirrored` must equal `point` reflected through the origin.
pub(super) fn check_mirror(
    state: SwitchState,
    point: PlanePoint,
    mirrored: PlanePoint,
    eps_sym: f64,
) -> Result<(), TopologyError> {
    if point.reflect().approx_eq(&mirrored, eps_sym) {
        Ok(())
    } else {
        Err(TopologyError::Asymmetric {
            state,
            point,
            mirrored,
        })
    }
}

/// `(leg rotations, complement)` that carry the catalog wedge onto wedge `k`.
fn placement(sector: usize) -> (usize, bool) {
    if sector % 2 == 0 {
        (sector / 2, false)
    } else {
        (((sector + 3) % SECTOR_COUNT) / 2, true)
    }
}

fn place(state: SwitchState, rotations: usize, complement: bool) -> SwitchState {
    let mut s = state;
    for _ in 0..rotations {
        s = s.rotate_legs();
    }
    if complement {
        s.complement()
    } else {
        s
    }
}

fn vertex_label(kind: VertexKind, point: &PlanePoint) -> String {
    match kind {
        VertexKind::Zero => kind.prefix().to_string(),
        _ => {
            let deg = (point.angle().to_degrees().round() as i64).rem_euclid(360);
            format!("{}{deg}", kind.prefix())
        }
    }
}

/// Deduplicates vertices across wedges by state set.
struct Interner {
    cfg: SvmCfg,
    vertices: Vec<Vertex>,
    by_states: HashMap<Vec<SwitchState>, VertexId>,
}

impl Interner {
    fn intern(
        &mut self,
        name: &str,
        kind: VertexKind,
        mut states: Vec<SwitchState>,
    ) -> Result<VertexId, TopologyError> {
        states.sort();
        states.dedup();
        if let Some(&id) = self.by_states.get(&states) {
            return Ok(id);
        }
        let Some((&first, rest)) = states.split_first() else {
            return Err(TopologyError::EmptyVertex {
                vertex: name.to_string(),
            });
        };
        let expected = differential(&first);
        for state in rest {
            let found = differential(state);
            if found != expected {
                return Err(TopologyError::InconsistentVertex {
                    vertex: name.to_string(),
                    state: *state,
                    expected,
                    found,
                });
            }
        }
        let point = to_plane(&expected);
        let id = VertexId(self.vertices.len());
        let label = vertex_label(kind, &point);
        tracing::debug!(
            vertex = %label,
            catalog_name = name,
            states = states.len(),
            alpha = point.alpha,
            beta = point.beta,
            "vertex added"
        );
        self.by_states.insert(states.clone(), id);
        self.vertices.push(Vertex {
            id,
            label,
            kind,
            point,
            differential: expected,
            states,
        });
        Ok(id)
    }

    fn space(&self, tri: [VertexId; 3]) -> Result<Space, crate::solver::SolveError> {
        let [o, a, b] = tri.map(|id| self.vertices[id.0].point);
        Space::new(Basis::new(o, a, b), self.cfg.eps_det)
    }
}

fn triangle(
    ids: &HashMap<&str, VertexId>,
    names: &[String; 3],
) -> Result<[VertexId; 3], TopologyError> {
    let mut out = [VertexId(0); 3];
    for (slot, name) in out.iter_mut().zip(names) {
        *slot = ids
            .get(name.as_str())
            .copied()
            .ok_or_else(|| TopologyError::UnknownVertex { name: name.clone() })?;
    }
    Ok(out)
}

/// Build the six sectors from `catalog`.
///
/// Fails (and builds nothing) on the first catalog defect: malformed or
/// empty state lists, states that disagree on `(u, v, w)`, a broken
/// reflection invariant, unknown triangle corners, or a degenerate basis.
pub fn build_topology(catalog: &Catalog, cfg: SvmCfg) -> Result<Topology, TopologyError> {
    check_state_symmetry(&cfg)?;

    let mut wedge: Vec<(&str, VertexKind, Vec<SwitchState>)> =
        Vec::with_capacity(catalog.vertices.len());
    for entry in &catalog.vertices {
        let states = entry
            .states
            .iter()
            .map(|&i| SwitchState::from_index(i))
            .collect::<Result<Vec<_>, _>>()?;
        if states.is_empty() {
            return Err(TopologyError::EmptyVertex {
                vertex: entry.name.clone(),
            });
        }
        wedge.push((entry.name.as_str(), entry.kind, states));
    }

    let mut interner = Interner {
        cfg,
        vertices: Vec::new(),
        by_states: HashMap::new(),
    };
    let mut sectors = Vec::with_capacity(SECTOR_COUNT);
    for index in 0..SECTOR_COUNT {
        let (rotations, complement) = placement(index);
        let mut ids: HashMap<&str, VertexId> = HashMap::with_capacity(wedge.len());
        for (name, kind, states) in &wedge {
            let placed = states
                .iter()
                .map(|&s| place(s, rotations, complement))
                .collect();
            let id = interner.intern(name, *kind, placed)?;
            ids.insert(*name, id);
        }

        let footprint = triangle(&ids, &catalog.footprint)?;
        let space = interner
            .space(footprint)
            .map_err(|source| TopologyError::Basis {
                sector: index,
                subsector: None,
                source,
            })?;
        let subsectors = catalog
            .subsectors
            .iter()
            .enumerate()
            .map(|(sub, names)| {
                let vertices = triangle(&ids, names)?;
                let space = interner
                    .space(vertices)
                    .map_err(|source| TopologyError::Basis {
                        sector: index,
                        subsector: Some(sub),
                        source,
                    })?;
                Ok(Subsector {
                    index: sub,
                    vertices,
                    space,
                })
            })
            .collect::<Result<Vec<_>, TopologyError>>()?;

        let lower_angle = space.edges()[0].angle();
        let span = (space.edges()[1].angle() - lower_angle).rem_euclid(TAU);
        tracing::debug!(
            sector = index,
            rotations,
            complement,
            subsectors = subsectors.len(),
            lower_deg = lower_angle.to_degrees(),
            "sector assembled"
        );
        sectors.push(Sector {
            index,
            lower_angle,
            upper_angle: lower_angle + span,
            footprint,
            space,
            subsectors,
        });
    }

    tracing::debug!(
        vertices = interner.vertices.len(),
        sectors = sectors.len(),
        "topology built"
    );
    Ok(Topology {
        vertices: interner.vertices,
        sectors,
        cfg,
    })
}
