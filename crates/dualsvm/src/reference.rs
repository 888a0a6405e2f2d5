//! Reference-point generators for sweeps, benches, and tests.
//!
//! - `rotating`: a constant-magnitude reference turning once around the plane,
//!   built as a `(d, q) = (m, 0)` vector through the inverse Park rotation.
//! - `random_reference`: uniform draw from a disc, reproducible from a
//!   `(seed, index)` replay token.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

use crate::algebra::PlanePoint;
use crate::transform::dq_to_plane;

/// `steps` samples `(theta, point)` of a reference of magnitude `magnitude`,
/// `theta = 2π·k/steps`.
pub fn rotating(magnitude: f64, steps: usize) -> Vec<(f64, PlanePoint)> {
    (0..steps)
        .map(|k| {
            let theta = TAU * k as f64 / steps as f64;
            (theta, dq_to_plane(theta, magnitude, 0.0))
        })
        .collect()
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Uniform point of the disc `|p| <= max_magnitude`.
pub fn random_reference(max_magnitude: f64, tok: ReplayToken) -> PlanePoint {
    let mut rng = tok.to_std_rng();
    let r = max_magnitude.max(0.0) * rng.gen::<f64>().sqrt();
    let theta = rng.gen::<f64>() * TAU;
    PlanePoint::new(r * theta.cos(), r * theta.sin())
}
