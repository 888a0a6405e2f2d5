//! Plane transform: power-invariant Clarke map and the Park rotation.
//!
//! Clarke rows are `[1, -1/2, -1/2]`, `[0, √3/2, -√3/2]`, `[1/√2, 1/√2, 1/√2]`,
//! all scaled by `√(2/3)`. The matrix is orthogonal, so its inverse is the
//! transpose. Planar analysis keeps `(alpha, beta)` and drops the
//! zero-sequence component `gamma`, which is still computed.

use nalgebra::{Matrix3, Vector3};

use crate::algebra::PlanePoint;
use crate::encoder::{differential, PhaseDifferential};
use crate::state::SwitchState;

/// Clarke matrix (power invariant).
pub fn clarke_matrix() -> Matrix3<f64> {
    let h = 3f64.sqrt() / 2.0;
    let z = std::f64::consts::FRAC_1_SQRT_2;
    Matrix3::new(
        1.0, -0.5, -0.5, //
        0.0, h, -h, //
        z, z, z,
    ) * (2.0f64 / 3.0).sqrt()
}

/// Inverse Clarke matrix (transpose of an orthogonal matrix).
pub fn inverse_clarke_matrix() -> Matrix3<f64> {
    clarke_matrix().transpose()
}

/// `(u, v, w) ↦ (alpha, beta, gamma)`.
#[inline]
pub fn clarke(d: &PhaseDifferential) -> Vector3<f64> {
    clarke_matrix() * Vector3::new(d.u, d.v, d.w)
}

/// `(alpha, beta, gamma) ↦ (u, v, w)`.
#[inline]
pub fn inv_clarke(abg: Vector3<f64>) -> PhaseDifferential {
    let x = inverse_clarke_matrix() * abg;
    PhaseDifferential {
        u: x[0],
        v: x[1],
        w: x[2],
    }
}

/// Planar part of the Clarke transform.
#[inline]
pub fn to_plane(d: &PhaseDifferential) -> PlanePoint {
    let abg = clarke(d);
    PlanePoint::new(abg[0], abg[1])
}

/// Reconstruct `(u, v, w)` from a plane point and the discarded `gamma`.
#[inline]
pub fn from_plane(p: PlanePoint, gamma: f64) -> PhaseDifferential {
    inv_clarke(Vector3::new(p.alpha, p.beta, gamma))
}

/// Encoder followed by the plane transform.
#[inline]
pub fn state_point(state: &SwitchState) -> PlanePoint {
    to_plane(&differential(state))
}

/// Park rotation by electrical angle `theta` (gamma passes through).
pub fn park_matrix(theta: f64) -> Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        c, s, 0.0, //
        -s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// `(alpha, beta, gamma) ↦ (d, q, 0)` in the frame rotated by `theta`.
#[inline]
pub fn park(theta: f64, abg: Vector3<f64>) -> Vector3<f64> {
    park_matrix(theta) * abg
}

#[inline]
pub fn inv_park(theta: f64, dq0: Vector3<f64>) -> Vector3<f64> {
    park_matrix(theta).transpose() * dq0
}

/// Plane point of a `(d, q)` reference at electrical angle `theta`.
pub fn dq_to_plane(theta: f64, d: f64, q: f64) -> PlanePoint {
    let abg = inv_park(theta, Vector3::new(d, q, 0.0));
    PlanePoint::new(abg[0], abg[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn clarke_is_orthogonal() {
        let c = clarke_matrix();
        let err = (c * c.transpose() - Matrix3::identity()).amax();
        assert!(err < 1e-12, "C·Cᵀ − I = {err}");
        let inv = c.try_inverse().unwrap();
        assert!((inv - inverse_clarke_matrix()).amax() < 1e-12);
    }

    #[test]
    fn small_vector_on_alpha_axis() {
        // (1,0,0)(0,0,0): δ = (1, 0, 0) → (2/3, -1/3, -1/3)
        let p = state_point(&SwitchState::from_index(32).unwrap());
        assert!((p.alpha - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert!(p.beta.abs() < 1e-15);
    }

    #[test]
    fn inverse_recovers_differential() {
        for s in SwitchState::all() {
            let d = differential(&s);
            let abg = clarke(&d);
            let back = from_plane(PlanePoint::new(abg[0], abg[1]), abg[2]);
            assert!((back.u - d.u).abs() < 1e-12);
            assert!((back.v - d.v).abs() < 1e-12);
            assert!((back.w - d.w).abs() < 1e-12);
        }
    }

    #[test]
    fn park_round_trip_and_dq_reference() {
        let abg = vector![0.3, -0.7, 0.1];
        let theta = 1.1;
        let back = inv_park(theta, park(theta, abg));
        assert!((back - abg).amax() < 1e-12);

        let p = dq_to_plane(0.0, 1.2, 0.0);
        assert!((p.alpha - 1.2).abs() < 1e-12 && p.beta.abs() < 1e-12);
        let p = dq_to_plane(std::f64::consts::FRAC_PI_2, 1.0, 0.0);
        assert!(p.alpha.abs() < 1e-12 && (p.beta - 1.0).abs() < 1e-12);
    }
}
