//! Sector/subsector topology of the alpha-beta plane.
//!
//! Purpose
//! - Turn the literal catalog of one 60° wedge into the six hexagon sectors,
//!   each tiled by triangular subsectors anchored at switch-state vertices.
//! - Reject a wrong catalog at build time: states declared equivalent must
//!   encode to bit-identical `(u, v, w)`, complementary states must reflect
//!   through the origin, and every triangle must span a proper basis.
//!
//! Replication
//! - Wedge `k` (covering `[60k°, 60(k+1)°)`) is the catalog wedge with its
//!   legs rotated `k/2` times for even `k`, and the complement of wedge
//!   `k − 3` for odd `k`. Vertices are shared across wedges and identified by
//!   their (sorted) state set.
//!
//! The built `Topology` is owned by the caller and read-only; lookups borrow it.

mod build;
mod catalog;
mod types;

use std::fmt;

use crate::algebra::PlanePoint;
use crate::encoder::PhaseDifferential;
use crate::solver::SolveError;
use crate::state::{StateError, SwitchState};

pub use build::{build_topology, check_state_symmetry, SECTOR_COUNT};
pub use catalog::{Catalog, VertexEntry, VertexKind};
pub use types::{Sector, Subsector, Topology, Vertex, VertexId};

/// Build-time defects of a catalog.
#[derive(Clone, Debug, PartialEq)]
pub enum TopologyError {
    /// A catalog state index is malformed.
    State(StateError),
    /// A catalog vertex lists no states.
    EmptyVertex { vertex: String },
    /// A triangle names a vertex the catalog does not define.
    UnknownVertex { name: String },
    /// Two states declared equivalent encode differently.
    InconsistentVertex {
        vertex: String,
        state: SwitchState,
        expected: PhaseDifferential,
        found: PhaseDifferential,
    },
    /// The complement of `state` does not land on the reflected point.
    Asymmetric {
        state: SwitchState,
        point: PlanePoint,
        mirrored: PlanePoint,
    },
    /// A footprint (`subsector == None`) or subsector basis is degenerate.
    Basis {
        sector: usize,
        subsector: Option<usize>,
        source: SolveError,
    },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::State(e) => write!(f, "invalid catalog state: {e}"),
            Self::EmptyVertex { vertex } => write!(f, "vertex {vertex} lists no switch states"),
            Self::UnknownVertex { name } => write!(f, "triangle references unknown vertex {name}"),
            Self::InconsistentVertex {
                vertex,
                state,
                expected,
                found,
            } => write!(
                f,
                "vertex {vertex}: state {state} encodes to {found:?}, expected {expected:?}"
            ),
            Self::Asymmetric {
                state,
                point,
                mirrored,
            } => write!(
                f,
                "state {state} at ({}, {}) but its complement lands at ({}, {})",
                point.alpha, point.beta, mirrored.alpha, mirrored.beta
            ),
            Self::Basis {
                sector,
                subsector: Some(sub),
                source,
            } => write!(f, "sector {sector}, subsector {sub}: {source}"),
            Self::Basis {
                sector,
                subsector: None,
                source,
            } => write!(f, "sector {sector} footprint: {source}"),
        }
    }
}

impl std::error::Error for TopologyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::State(e) => Some(e),
            Self::Basis { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<StateError> for TopologyError {
    fn from(e: StateError) -> Self {
        Self::State(e)
    }
}

#[cfg(test)]
mod tests;
