//! Switch states of the two inverter banks.
//!
//! Conventions
//! - Gate order is `(U1, V1, W1, U2, V2, W2)`: the three legs of bank 1, then
//!   the three legs of bank 2. Leg `x` of the converter is the gate pair
//!   `(x1, x2)`.
//! - Integer indices read the gates most-significant bit first, so index `1`
//!   is `(0,0,0)(0,0,1)` and index `32` is `(1,0,0)(0,0,0)`.

use std::fmt;

/// Number of gate signals in one state.
pub const GATES: usize = 6;
/// Size of the full state space.
pub const STATE_COUNT: usize = 1 << GATES;

/// Malformed literal states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateError {
    /// Literal carries the wrong number of gates.
    Width { len: usize },
    /// Gate value other than 0 or 1.
    Bit { pos: usize, value: u8 },
    /// Integer index does not fit in `GATES` bits.
    Index { index: usize },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width { len } => write!(f, "switch state needs {GATES} gates, got {len}"),
            Self::Bit { pos, value } => write!(f, "gate {pos} must be 0 or 1, got {value}"),
            Self::Index { index } => {
                write!(f, "state index {index} out of range (< {STATE_COUNT})")
            }
        }
    }
}

impl std::error::Error for StateError {}

/// One switching configuration of both banks; immutable once built.
///
/// Ordering follows the integer index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SwitchState {
    gates: [u8; GATES],
}

impl SwitchState {
    /// Decode an integer index, most-significant gate first.
    pub fn from_index(index: usize) -> Result<Self, StateError> {
        if index >= STATE_COUNT {
            return Err(StateError::Index { index });
        }
        let mut gates = [0u8; GATES];
        for (pos, g) in gates.iter_mut().enumerate() {
            *g = ((index >> (GATES - 1 - pos)) & 1) as u8;
        }
        Ok(Self { gates })
    }

    /// Build from a literal gate sequence.
    pub fn from_bits(bits: &[u8]) -> Result<Self, StateError> {
        let gates: [u8; GATES] = bits
            .try_into()
            .map_err(|_| StateError::Width { len: bits.len() })?;
        if let Some((pos, &value)) = gates.iter().enumerate().find(|&(_, &b)| b > 1) {
            return Err(StateError::Bit { pos, value });
        }
        Ok(Self { gates })
    }

    /// Every state of the space, in index order.
    pub fn all() -> impl Iterator<Item = SwitchState> {
        (0..STATE_COUNT).filter_map(|i| Self::from_index(i).ok())
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.gates.iter().fold(0, |n, &g| (n << 1) | g as usize)
    }

    #[inline]
    pub fn gate(&self, pos: usize) -> u8 {
        self.gates[pos]
    }

    #[inline]
    pub fn gates(&self) -> [u8; GATES] {
        self.gates
    }

    /// Bitwise complement (`1 - bit`): the diametrically opposite configuration.
    pub fn complement(&self) -> Self {
        let mut gates = self.gates;
        for g in gates.iter_mut() {
            *g = 1 - *g;
        }
        Self { gates }
    }

    /// Relabel legs `U→V→W→U` in both banks.
    ///
    /// The phase differential rotates with the labels, so the plane point
    /// turns by +120°.
    pub fn rotate_legs(&self) -> Self {
        let g = self.gates;
        Self {
            gates: [g[2], g[0], g[1], g[5], g[3], g[4]],
        }
    }
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.gates;
        write!(
            f,
            "({},{},{})({},{},{})",
            g[0], g[1], g[2], g[3], g[4], g[5]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_codec_round_trips_whole_space() {
        let all: Vec<_> = SwitchState::all().collect();
        assert_eq!(all.len(), STATE_COUNT);
        for (i, s) in all.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }

    #[test]
    fn msb_first_decoding() {
        let s = SwitchState::from_index(1).unwrap();
        assert_eq!(s.gates(), [0, 0, 0, 0, 0, 1]);
        let s = SwitchState::from_index(32).unwrap();
        assert_eq!(s.gates(), [1, 0, 0, 0, 0, 0]);
        assert_eq!(s.to_string(), "(1,0,0)(0,0,0)");
    }

    #[test]
    fn malformed_literals_are_rejected() {
        assert_eq!(
            SwitchState::from_index(64),
            Err(StateError::Index { index: 64 })
        );
        assert_eq!(
            SwitchState::from_bits(&[0, 1, 0]),
            Err(StateError::Width { len: 3 })
        );
        assert_eq!(
            SwitchState::from_bits(&[0, 1, 0, 2, 0, 0]),
            Err(StateError::Bit { pos: 3, value: 2 })
        );
        let ok = SwitchState::from_bits(&[0, 0, 0, 0, 1, 1]).unwrap();
        assert_eq!(ok.index(), 3);
    }

    #[test]
    fn complement_and_leg_rotation() {
        let s = SwitchState::from_index(1).unwrap();
        assert_eq!(s.complement().index(), 62);
        assert_eq!(s.complement().complement(), s);
        for s in SwitchState::all() {
            assert_eq!(s.rotate_legs().rotate_legs().rotate_legs(), s);
            assert_eq!(s.complement().index(), STATE_COUNT - 1 - s.index());
        }
        // (1,0,0)(0,1,1) -> (0,1,0)(1,0,1)
        let s = SwitchState::from_index(35).unwrap();
        assert_eq!(s.rotate_legs().index(), 21);
    }
}
