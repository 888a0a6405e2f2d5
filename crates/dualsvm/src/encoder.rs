//! Phase-voltage encoder: switch state → line differential `(u, v, w)`.
//!
//! Each converter leg is a gate pair `(x1, x2)`; a gate contributes `+1/2`
//! when on and `-1/2` when off, and the leg delta is the bank-1 level minus
//! the bank-2 level (so deltas lie in `{-1, 0, 1}`). The phase value for axis
//! `x` is `(2/3)·δx − (1/3)·(δy + δz)` over the two remaining legs.
//!
//! All outputs are integer multiples of one third; states with equal
//! multiples produce bit-identical floats because every product and
//! difference rounds the same exact value.

use crate::state::SwitchState;

/// Gate positions `(bank 1, bank 2)` of one leg.
pub type GatePair = (usize, usize);

pub const LEG_U: GatePair = (0, 3);
pub const LEG_V: GatePair = (1, 4);
pub const LEG_W: GatePair = (2, 5);

/// Per-phase differential of one state.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PhaseDifferential {
    pub u: f64,
    pub v: f64,
    pub w: f64,
}

#[inline]
fn gate_level(bit: u8) -> f64 {
    if bit == 1 {
        0.5
    } else {
        -0.5
    }
}

/// Level difference across one leg: `level(x1) − level(x2)`.
#[inline]
pub fn leg_delta(state: &SwitchState, leg: GatePair) -> f64 {
    gate_level(state.gate(leg.0)) - gate_level(state.gate(leg.1))
}

/// `order[0]` is the axis' own leg, the others follow the fixed rotation.
#[inline]
fn axis_value(state: &SwitchState, order: [GatePair; 3]) -> f64 {
    let dx = leg_delta(state, order[0]);
    let dy = leg_delta(state, order[1]);
    let dz = leg_delta(state, order[2]);
    2.0 / 3.0 * dx - 1.0 / 3.0 * (dy + dz)
}

/// Encode a switch state.
pub fn differential(state: &SwitchState) -> PhaseDifferential {
    PhaseDifferential {
        u: axis_value(state, [LEG_U, LEG_V, LEG_W]),
        v: axis_value(state, [LEG_V, LEG_U, LEG_W]),
        w: axis_value(state, [LEG_W, LEG_V, LEG_U]),
    }
}

/// Numerators over 3 of `(u, v, w)`, e.g. `[4, -2, -2]` for `(4/3, -2/3, -2/3)`.
pub fn thirds(d: &PhaseDifferential) -> [i8; 3] {
    [d.u, d.v, d.w].map(|x| (x * 3.0).round() as i8)
}

/// Render a numerator over 3 as a reduced fraction (`"-2/3"`, `"1"`, `"0"`).
pub fn format_thirds(n: i8) -> String {
    if n % 3 == 0 {
        format!("{}", n / 3)
    } else {
        format!("{n}/3")
    }
}
