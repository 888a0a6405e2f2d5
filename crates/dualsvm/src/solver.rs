//! Basis solver and sector locator.
//!
//! Purpose
//! - Express a plane point in a triangle's edge basis,
//!   `point = origin + u·edge1 + v·edge2`, and use those coordinates both as a
//!   containment test and as the duty ratios of the two edge vertices.
//!
//! Conventions
//! - The system is always 2×2, so it is solved directly by Cramer's rule.
//! - The outer footprint test is a parallelogram test (`0 <= u, v <= 1`); the
//!   subsector test is a triangle test (`u, v >= 0`, `u + v <= 1`). Both use
//!   `SvmCfg::eps_feas` slack, and subsectors are tried in catalog order.
//! - The slack only decides the match. Stored duty ratios are projected
//!   onto the closed triangle, so `u, v >= 0` and `u + v <= 1` always hold.
//! - A point outside every subsector is a normal `None`, not an error.

use std::fmt;

use crate::algebra::{concatenate, difference, PlanePoint, Vector};
use crate::cfg::SvmCfg;
use crate::topology::{Sector, Subsector, Topology, Vertex};

/// Failure of a 2×2 solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SolveError {
    /// Edge vectors are parallel or zero.
    DegenerateBasis { det: f64 },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateBasis { det } => {
                write!(f, "degenerate basis (determinant {det:e})")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Coordinates of a point along a basis' two edges.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DutyRatios {
    pub u: f64,
    pub v: f64,
}

impl DutyRatios {
    /// Share left for the basis origin: `1 − u − v`.
    #[inline]
    pub fn remainder(&self) -> f64 {
        1.0 - self.u - self.v
    }

    #[inline]
    pub fn in_parallelogram(&self, eps: f64) -> bool {
        self.u >= -eps && self.u <= 1.0 + eps && self.v >= -eps && self.v <= 1.0 + eps
    }

    #[inline]
    pub fn in_triangle(&self, eps: f64) -> bool {
        self.u >= -eps && self.v >= -eps && self.u + self.v <= 1.0 + eps
    }

    /// Nearest ratios on the closed triangle: negatives clamp to 0, and an
    /// excess `u + v > 1` is rescaled onto the `u + v = 1` edge.
    pub fn projected(&self) -> Self {
        let u = self.u.max(0.0);
        let v = self.v.max(0.0);
        let sum = u + v;
        if sum > 1.0 {
            let u = (u / sum).min(1.0);
            Self { u, v: 1.0 - u }
        } else {
            Self { u, v }
        }
    }
}

/// Two edge vectors sharing one origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Basis {
    pub origin: PlanePoint,
    pub edges: [Vector; 2],
}

impl Basis {
    /// Basis of the triangle `(origin, end1, end2)`.
    pub fn new(origin: PlanePoint, end1: PlanePoint, end2: PlanePoint) -> Self {
        Self {
            origin,
            edges: [Vector::new(origin, end1), Vector::new(origin, end2)],
        }
    }

    /// `det [edge1 edge2]`.
    #[inline]
    pub fn determinant(&self) -> f64 {
        let a = self.edges[0].delta();
        let b = self.edges[1].delta();
        a.x * b.y - a.y * b.x
    }

    /// `origin + u·edge1 + v·edge2`.
    pub fn point_at(&self, u: f64, v: f64) -> PlanePoint {
        concatenate(&self.edges[1].scale(v), &self.edges[0].scale(u)).end
    }
}

#[inline]
fn cramer(basis: &Basis, det: f64, point: &PlanePoint) -> DutyRatios {
    let e1 = basis.edges[0].delta();
    let e2 = basis.edges[1].delta();
    let r = difference(point, &basis.origin);
    DutyRatios {
        u: (r.x * e2.y - e2.x * r.y) / det,
        v: (e1.x * r.y - r.x * e1.y) / det,
    }
}

/// Solve `M·[u, v]ᵗ = point − origin` with the edge deltas as columns of `M`.
pub fn solve(basis: &Basis, point: &PlanePoint, eps_det: f64) -> Result<DutyRatios, SolveError> {
    let det = basis.determinant();
    if !det.is_finite() || det.abs() <= eps_det {
        return Err(SolveError::DegenerateBasis { det });
    }
    Ok(cramer(basis, det, point))
}

/// A basis checked to be non-degenerate; solving against it cannot fail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Space {
    basis: Basis,
    det: f64,
}

impl Space {
    pub fn new(basis: Basis, eps_det: f64) -> Result<Self, SolveError> {
        let det = basis.determinant();
        if !det.is_finite() || det.abs() <= eps_det {
            return Err(SolveError::DegenerateBasis { det });
        }
        Ok(Self { basis, det })
    }

    #[inline]
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    #[inline]
    pub fn origin(&self) -> PlanePoint {
        self.basis.origin
    }

    #[inline]
    pub fn edges(&self) -> &[Vector; 2] {
        &self.basis.edges
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.det
    }

    #[inline]
    pub fn coordinates(&self, point: &PlanePoint) -> DutyRatios {
        cramer(&self.basis, self.det, point)
    }
}

/// Result of a successful lookup.
#[derive(Clone, Copy, Debug)]
pub struct Located<'a> {
    pub sector: usize,
    pub subsector: &'a Subsector,
    pub duty: DutyRatios,
}

impl Located<'_> {
    /// Point rebuilt from the duty ratios.
    pub fn reconstruct(&self) -> PlanePoint {
        self.subsector
            .space
            .basis()
            .point_at(self.duty.u, self.duty.v)
    }
}

/// Find the subsector of `sector` containing `point` (first match in catalog order).
pub fn locate<'a>(sector: &'a Sector, point: &PlanePoint, cfg: &SvmCfg) -> Option<Located<'a>> {
    let outer = sector.space.coordinates(point);
    if !outer.in_parallelogram(cfg.eps_feas) {
        tracing::trace!(
            sector = sector.index,
            u = outer.u,
            v = outer.v,
            "outside sector footprint"
        );
        return None;
    }
    let hit = sector.subsectors.iter().find_map(|sub| {
        let duty = sub.space.coordinates(point);
        duty.in_triangle(cfg.eps_feas).then(|| Located {
            sector: sector.index,
            subsector: sub,
            duty: duty.projected(),
        })
    });
    if hit.is_none() {
        tracing::trace!(
            sector = sector.index,
            alpha = point.alpha,
            beta = point.beta,
            "inside footprint but in no subsector"
        );
    }
    hit
}

/// Time spent at one vertex of the matched subsector.
#[derive(Clone, Copy, Debug)]
pub struct Dwell<'a> {
    pub vertex: &'a Vertex,
    pub duration: f64,
}

impl Topology {
    /// Locate over the whole plane: the wedge containing the point's angle
    /// first, then the remaining sectors in index order.
    pub fn locate(&self, point: &PlanePoint) -> Option<Located<'_>> {
        let first = self.sector_for_angle(point.angle());
        if let Some(sector) = first {
            if let Some(hit) = locate(sector, point, self.cfg()) {
                return Some(hit);
            }
        }
        let skip = first.map(|s| s.index);
        self.sectors()
            .iter()
            .filter(|s| Some(s.index) != skip)
            .find_map(|s| locate(s, point, self.cfg()))
    }

    /// Split `period` over the subsector's vertices: origin `(1−u−v)·T`,
    /// first edge vertex `u·T`, second edge vertex `v·T`.
    ///
    /// `None` when `located` names vertices this topology does not have.
    pub fn dwell_times<'a>(
        &'a self,
        located: &Located<'_>,
        period: f64,
    ) -> Option<[Dwell<'a>; 3]> {
        let duty = located.duty.projected();
        let [o, a, b] = located.subsector.vertices;
        Some([
            Dwell {
                vertex: self.vertex(o)?,
                duration: duty.remainder() * period,
            },
            Dwell {
                vertex: self.vertex(a)?,
                duration: duty.u * period,
            },
            Dwell {
                vertex: self.vertex(b)?,
                duration: duty.v * period,
            },
        ])
    }
}
