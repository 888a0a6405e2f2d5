use super::*;
use crate::cfg::SvmCfg;
use crate::encoder::differential;
use crate::transform::state_point;
use std::f64::consts::{FRAC_PI_3, TAU};

fn dual() -> Topology {
    Topology::dual_inverter().expect("built-in catalog is consistent")
}

fn labels(t: &Topology, ids: &[VertexId]) -> Vec<String> {
    ids.iter()
        .map(|&id| t.vertex(id).unwrap().label.clone())
        .collect()
}

#[test]
fn builds_hexagon_of_nineteen_vertices() {
    let t = dual();
    assert_eq!(t.vertices().len(), 19);
    assert_eq!(t.sectors().len(), SECTOR_COUNT);
    for s in t.sectors() {
        assert_eq!(s.subsectors.len(), 4);
    }
    // every one of the 64 states is claimed by exactly one vertex
    let claimed: usize = t.vertices().iter().map(|v| v.states.len()).sum();
    assert_eq!(claimed, 64);
    for s in SwitchState::all() {
        assert!(t.vertex_of_state(&s).is_some(), "state {s} unclaimed");
    }
    let max = t.max_magnitude();
    assert!((max - 2.0 * (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
}

#[test]
fn equivalent_states_encode_bit_identically() {
    let t = dual();
    for v in t.vertices() {
        for s in &v.states {
            assert_eq!(differential(s), v.differential, "{} / {s}", v.label);
        }
    }
}

#[test]
fn state_one_and_its_complement() {
    let t = dual();
    let s1 = SwitchState::from_index(1).unwrap();
    let v = t.vertex_of_state(&s1).unwrap();
    assert_eq!(v.label, "S60");
    let idx: Vec<usize> = v.states.iter().map(|s| s.index()).collect();
    assert_eq!(idx, vec![1, 19, 37, 48, 55, 57]);

    let comp = s1.complement();
    assert_eq!(comp.gates(), [1, 1, 1, 1, 1, 0]);
    let p = state_point(&s1);
    let q = state_point(&comp);
    assert!(p.reflect().approx_eq(&q, 1e-9));
    assert!(v.mirrored_point().approx_eq(&q, 1e-12));
    assert_eq!(t.vertex_of_state(&comp).unwrap().label, "S240");
}

#[test]
fn whole_state_space_is_symmetric() {
    assert!(check_state_symmetry(&SvmCfg::default()).is_ok());
    for s in SwitchState::all() {
        let p = state_point(&s);
        let q = state_point(&s.complement());
        assert!((p.alpha + q.alpha).abs() <= 1e-9);
        assert!((p.beta + q.beta).abs() <= 1e-9);
    }
}

#[test]
fn sectors_tile_the_full_turn() {
    let t = dual();
    for (k, s) in t.sectors().iter().enumerate() {
        assert_eq!(s.index, k);
        assert!((s.lower_angle - k as f64 * FRAC_PI_3).abs() < 1e-12, "sector {k}");
        assert!((s.upper_angle - s.lower_angle - FRAC_PI_3).abs() < 1e-12);
        assert!(s.origin().approx_eq(&crate::algebra::PlanePoint::ORIGIN, 1e-15));
    }
    for k in 0..12 {
        let theta = (k as f64 + 0.5) * TAU / 12.0;
        assert_eq!(t.sector_for_angle(theta).unwrap().index, k / 2);
    }
    assert_eq!(t.sector_for_angle(-0.1).unwrap().index, 5);
}

#[test]
fn replicated_wedges_follow_rotation_and_complement() {
    let t = dual();
    let s0 = &t.sectors()[0];
    assert_eq!(labels(&t, &s0.footprint), ["Z", "L0", "L60"]);
    let sub: Vec<_> = s0
        .subsectors
        .iter()
        .map(|s| labels(&t, &s.vertices))
        .collect();
    assert_eq!(
        sub,
        vec![
            vec!["Z", "S0", "S60"],
            vec!["S0", "L0", "M30"],
            vec!["S0", "M30", "S60"],
            vec!["S60", "M30", "L60"],
        ]
    );
    assert_eq!(labels(&t, &t.sectors()[1].footprint), ["Z", "L60", "L120"]);
    assert_eq!(labels(&t, &t.sectors()[3].footprint), ["Z", "L180", "L240"]);
    assert_eq!(
        labels(&t, &t.sectors()[5].subsectors[3].vertices),
        ["S0", "M330", "L0"]
    );
}

#[test]
fn independent_instances() {
    let a = dual();
    let b = Topology::build(&Catalog::default(), SvmCfg::default()).unwrap();
    assert_eq!(a.vertices().len(), b.vertices().len());
    for (x, y) in a.vertices().iter().zip(b.vertices()) {
        assert_eq!(x.states, y.states);
        assert_eq!(x.point, y.point);
    }
}

#[test]
fn inconsistent_catalog_is_fatal() {
    let mut cat = Catalog::dual_inverter();
    // state 35 is a large vector, not a small one
    cat.vertices[1].states.push(35);
    match Topology::build(&cat, SvmCfg::default()) {
        Err(TopologyError::InconsistentVertex { vertex, state, .. }) => {
            assert_eq!(vertex, "S0");
            assert_eq!(state.index(), 35);
        }
        other => panic!("expected inconsistency, got {other:?}"),
    }
}

#[test]
fn catalog_reference_errors() {
    let mut cat = Catalog::dual_inverter();
    cat.subsectors.push(["S0".into(), "M30".into(), "X".into()]);
    assert_eq!(
        Topology::build(&cat, SvmCfg::default()).unwrap_err(),
        TopologyError::UnknownVertex { name: "X".into() }
    );

    let mut cat = Catalog::dual_inverter();
    cat.vertices[3].states.clear();
    assert_eq!(
        Topology::build(&cat, SvmCfg::default()).unwrap_err(),
        TopologyError::EmptyVertex {
            vertex: "M30".into()
        }
    );

    let mut cat = Catalog::dual_inverter();
    cat.vertices[0].states.push(64);
    assert!(matches!(
        Topology::build(&cat, SvmCfg::default()),
        Err(TopologyError::State(crate::state::StateError::Index { index: 64 }))
    ));
}

#[test]
fn collinear_triangle_is_degenerate() {
    let mut cat = Catalog::dual_inverter();
    cat.subsectors.push(["Z".into(), "S0".into(), "L0".into()]);
    let err = Topology::build(&cat, SvmCfg::default()).unwrap_err();
    assert!(matches!(
        err,
        TopologyError::Basis {
            sector: 0,
            subsector: Some(4),
            ..
        }
    ));
    assert!(err.to_string().contains("degenerate basis"));
}

#[test]
fn broken_reflection_is_reported() {
    let state = SwitchState::from_index(3).unwrap();
    let point = state_point(&state);
    let mirrored = state_point(&state.complement());
    assert!(build::check_mirror(state, point, mirrored, 1e-9).is_ok());

    let skewed = PlanePoint::new(mirrored.alpha, mirrored.beta + 1e-6);
    let err = build::check_mirror(state, point, skewed, 1e-9).unwrap_err();
    assert!(err.to_string().contains(&state.to_string()));
    match err {
        TopologyError::Asymmetric {
            state: s,
            mirrored: m,
            ..
        } => {
            assert_eq!(s, state);
            assert_eq!(m, skewed);
        }
        other => panic!("unexpected {other:?}"),
    }
}
