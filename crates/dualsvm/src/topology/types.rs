//! Read-only views of a built topology.

use crate::algebra::PlanePoint;
use crate::cfg::SvmCfg;
use crate::encoder::PhaseDifferential;
use crate::solver::Space;
use crate::state::SwitchState;
use crate::transform::state_point;

use super::build::build_topology;
use super::catalog::{Catalog, VertexKind};
use super::TopologyError;

/// Index into `Topology::vertices()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// A plane point annotated with the switch states that produce it.
///
/// Invariants:
/// - `states` is non-empty, sorted by index, and every state encodes to
///   exactly `differential`.
#[derive(Clone, Debug)]
pub struct Vertex {
    pub id: VertexId,
    /// Kind prefix plus polar angle in degrees, e.g. `S60`; `Z` for zero.
    pub label: String,
    pub kind: VertexKind,
    pub point: PlanePoint,
    pub differential: PhaseDifferential,
    pub states: Vec<SwitchState>,
}

impl Vertex {
    /// Lowest-index state of the vertex.
    #[inline]
    pub fn representative(&self) -> SwitchState {
        self.states[0]
    }

    /// Point produced by the complemented state set.
    pub fn mirrored_point(&self) -> PlanePoint {
        state_point(&self.representative().complement())
    }
}

/// Triangle `[origin, edge1 end, edge2 end]` inside one sector.
#[derive(Clone, Debug)]
pub struct Subsector {
    /// Position in the sector's search order.
    pub index: usize,
    pub vertices: [VertexId; 3],
    pub space: Space,
}

/// One hexagon wedge.
#[derive(Clone, Debug)]
pub struct Sector {
    pub index: usize,
    /// Wedge angles in radians; `lower` in `[0, 2π)`, `upper > lower`.
    pub lower_angle: f64,
    pub upper_angle: f64,
    pub footprint: [VertexId; 3],
    /// Outer basis: origin to the two large corners.
    pub space: Space,
    pub subsectors: Vec<Subsector>,
}

impl Sector {
    #[inline]
    pub fn origin(&self) -> PlanePoint {
        self.space.origin()
    }

    /// Whether `theta` (any real) falls in `[lower, upper)` modulo 2π.
    pub fn contains_angle(&self, theta: f64) -> bool {
        let tau = std::f64::consts::TAU;
        let rel = (theta - self.lower_angle).rem_euclid(tau);
        rel < self.upper_angle - self.lower_angle
    }
}

/// Sectors, subsectors and vertices of one converter, built once.
#[derive(Clone, Debug)]
pub struct Topology {
    pub(super) vertices: Vec<Vertex>,
    pub(super) sectors: Vec<Sector>,
    pub(super) cfg: SvmCfg,
}

impl Topology {
    /// Build from `catalog`; see `build_topology`.
    pub fn build(catalog: &Catalog, cfg: SvmCfg) -> Result<Self, TopologyError> {
        build_topology(catalog, cfg)
    }

    /// Built-in dual-inverter catalog with default tolerances.
    pub fn dual_inverter() -> Result<Self, TopologyError> {
        build_topology(&Catalog::dual_inverter(), SvmCfg::default())
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    #[inline]
    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    #[inline]
    pub fn sector(&self, index: usize) -> Option<&Sector> {
        self.sectors.get(index)
    }

    #[inline]
    pub fn cfg(&self) -> &SvmCfg {
        &self.cfg
    }

    /// Vertex whose state set contains `state`.
    pub fn vertex_of_state(&self, state: &SwitchState) -> Option<&Vertex> {
        self.vertices
            .iter()
            .find(|v| v.states.binary_search(state).is_ok())
    }

    /// Longest vertex vector (hexagon circumradius).
    pub fn max_magnitude(&self) -> f64 {
        self.vertices
            .iter()
            .map(|v| v.point.magnitude())
            .fold(0.0, f64::max)
    }

    /// Sector whose wedge contains the angle.
    pub fn sector_for_angle(&self, theta: f64) -> Option<&Sector> {
        self.sectors.iter().find(|s| s.contains_angle(theta))
    }
}
