//! Plane points, vectors, and the operations the topology and solver share.
//!
//! Points are plain values; where they came from (switch states, a caller's
//! reference) is carried alongside by `topology::Vertex`, never inside the
//! point, so difference/scale/concatenate behave the same for every point.

use nalgebra::Vector2;
use std::f64::consts::TAU;

/// Tolerance-bounded equality, relative to operand magnitude (floor of 1).
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps * 1f64.max(a.abs()).max(b.abs())
}

/// Point of the alpha-beta plane.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PlanePoint {
    pub alpha: f64,
    pub beta: f64,
}

impl PlanePoint {
    pub const ORIGIN: PlanePoint = PlanePoint {
        alpha: 0.0,
        beta: 0.0,
    };

    #[inline]
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    #[inline]
    pub fn from_vec2(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.alpha, self.beta)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.alpha.hypot(self.beta)
    }

    /// Polar angle in `[0, 2π)`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.beta.atan2(self.alpha).rem_euclid(TAU)
    }

    /// Translate by `(d_alpha, d_beta)`.
    #[inline]
    pub fn offset(&self, d: Vector2<f64>) -> Self {
        Self::new(self.alpha + d.x, self.beta + d.y)
    }

    /// Reflection through the origin.
    #[inline]
    pub fn reflect(&self) -> Self {
        Self::new(-self.alpha, -self.beta)
    }

    pub fn approx_eq(&self, other: &PlanePoint, eps: f64) -> bool {
        approx_eq(self.alpha, other.alpha, eps) && approx_eq(self.beta, other.beta, eps)
    }
}

/// `(d_alpha, d_beta) = end − origin`.
#[inline]
pub fn difference(end: &PlanePoint, origin: &PlanePoint) -> Vector2<f64> {
    Vector2::new(end.alpha - origin.alpha, end.beta - origin.beta)
}

/// Directed segment `origin → end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    pub origin: PlanePoint,
    pub end: PlanePoint,
}

impl Vector {
    #[inline]
    pub fn new(origin: PlanePoint, end: PlanePoint) -> Self {
        Self { origin, end }
    }

    #[inline]
    pub fn delta(&self) -> Vector2<f64> {
        difference(&self.end, &self.origin)
    }

    #[inline]
    pub fn delta_alpha(&self) -> f64 {
        self.end.alpha - self.origin.alpha
    }

    #[inline]
    pub fn delta_beta(&self) -> f64 {
        self.end.beta - self.origin.beta
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }

    /// Direction angle in `[0, 2π)`.
    #[inline]
    pub fn angle(&self) -> f64 {
        PlanePoint::from_vec2(self.delta()).angle()
    }

    /// Same origin, end moved to `origin + k·delta`.
    #[inline]
    pub fn scale(&self, k: f64) -> Vector {
        Vector::new(self.origin, self.origin.offset(self.delta() * k))
    }

    #[inline]
    pub fn reflect(&self) -> Vector {
        Vector::new(self.origin.reflect(), self.end.reflect())
    }
}

/// Chain `v1` onto the end of `v2`: origin `v2.end`, end `v2.end + v1.delta`.
#[inline]
pub fn concatenate(v1: &Vector, v2: &Vector) -> Vector {
    Vector::new(v2.end, v2.end.offset(v1.delta()))
}
