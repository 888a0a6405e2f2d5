//! Literal switch-state catalog of the first 60° wedge.
//!
//! Converter data, not computed: which states realize which wedge corner, and
//! how the wedge is cut into triangles. Triangles are written
//! `[origin, edge1 end, edge2 end]` with edge1 on the wedge's lower-angle side.

use std::fmt;

/// Magnitude class of a vertex (zero, small, medium, large vector).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VertexKind {
    Zero,
    Small,
    Medium,
    Large,
}

impl VertexKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Zero => "Z",
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }
}

impl fmt::Display for VertexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Zero => "zero",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        f.write_str(name)
    }
}

/// One wedge corner and every state index that realizes it.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexEntry {
    pub name: String,
    pub kind: VertexKind,
    pub states: Vec<usize>,
}

/// Vertex/state table of one converter's wedge.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    pub vertices: Vec<VertexEntry>,
    /// Outer footprint `[origin, edge1 end, edge2 end]`.
    pub footprint: [String; 3],
    /// Subsector triangles, in search order.
    pub subsectors: Vec<[String; 3]>,
}

const DUAL_INVERTER_VERTICES: &[(&str, VertexKind, &[usize])] = &[
    ("Z", VertexKind::Zero, &[0, 7, 9, 18, 27, 36, 45, 54, 56, 63]),
    ("S0", VertexKind::Small, &[3, 32, 39, 41, 50, 59]),
    ("S60", VertexKind::Small, &[1, 19, 37, 48, 55, 57]),
    ("M30", VertexKind::Medium, &[33, 51]),
    ("L0", VertexKind::Large, &[35]),
    ("L60", VertexKind::Large, &[49]),
];

const DUAL_INVERTER_FOOTPRINT: [&str; 3] = ["Z", "L0", "L60"];

const DUAL_INVERTER_SUBSECTORS: &[[&str; 3]] = &[
    ["Z", "S0", "S60"],
    ["S0", "L0", "M30"],
    ["S0", "M30", "S60"],
    ["S60", "M30", "L60"],
];

impl Catalog {
    /// Dual two-level inverter feeding an open-end winding (three-level hexagon).
    pub fn dual_inverter() -> Self {
        Self {
            vertices: DUAL_INVERTER_VERTICES
                .iter()
                .map(|&(name, kind, states)| VertexEntry {
                    name: name.to_string(),
                    kind,
                    states: states.to_vec(),
                })
                .collect(),
            footprint: DUAL_INVERTER_FOOTPRINT.map(String::from),
            subsectors: DUAL_INVERTER_SUBSECTORS
                .iter()
                .map(|&t| t.map(String::from))
                .collect(),
        }
    }

    pub fn vertex(&self, name: &str) -> Option<&VertexEntry> {
        self.vertices.iter().find(|v| v.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::dual_inverter()
    }
}
