//! Space-vector geometry of a dual two-level converter.
//!
//! The 64 gate patterns of two three-leg inverter banks (open-end winding)
//! collapse onto 19 points of the alpha-beta plane, a three-level hexagon.
//! This crate encodes switch states, maps them through the power-invariant
//! Clarke transform, tiles the hexagon into six sectors of four triangular
//! subsectors, and solves for the duty ratios that reproduce a reference
//! point.
//!
//! Data flow
//! - `state` → `encoder` → `transform` give plane points of raw states.
//! - `topology` builds the sector catalog once from literal state data.
//! - `solver` locates a reference point and returns the subsector's duty
//!   ratios (and dwell times for a switching period).
//!
//! No PWM sequencing, dead-time insertion, or hardware I/O lives here.

pub mod algebra;
pub mod cfg;
pub mod encoder;
pub mod reference;
pub mod solver;
pub mod state;
pub mod topology;
pub mod transform;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use algebra::{PlanePoint, Vector};
pub use cfg::SvmCfg;
pub use solver::{locate, solve, Basis, DutyRatios, Located, SolveError};
pub use state::SwitchState;
pub use topology::{Catalog, Topology, TopologyError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algebra::{concatenate, difference, PlanePoint, Vector};
    pub use crate::cfg::SvmCfg;
    pub use crate::encoder::{differential, PhaseDifferential};
    pub use crate::reference::{random_reference, rotating, ReplayToken};
    pub use crate::solver::{locate, solve, Basis, Dwell, DutyRatios, Located, Space};
    pub use crate::state::SwitchState;
    pub use crate::topology::{Catalog, Sector, Subsector, Topology, Vertex, VertexId};
    pub use crate::transform::{dq_to_plane, state_point, to_plane};
}
