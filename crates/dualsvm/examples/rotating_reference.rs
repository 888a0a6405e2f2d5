//! Dwell times along a rotating reference vector.
//!
//! Prints, for a reference of fixed magnitude sampled every 15°, the matched
//! sector/subsector and how a 100 µs switching period splits over the three
//! subsector vertices (with one representative switch state each).

use dualsvm::prelude::*;

fn main() {
    let topo = Topology::dual_inverter().expect("built-in catalog");
    let period = 100e-6;
    for (theta, p) in rotating(1.1, 24) {
        let Some(hit) = topo.locate(&p) else {
            println!("{:6.1}°  outside hexagon", theta.to_degrees());
            continue;
        };
        let dwell = topo
            .dwell_times(&hit, period)
            .expect("lookup came from this topology");
        let parts: Vec<String> = dwell
            .iter()
            .map(|d| {
                format!(
                    "{}:{} {:5.1}µs",
                    d.vertex.label,
                    d.vertex.representative(),
                    d.duration * 1e6
                )
            })
            .collect();
        println!(
            "{:6.1}°  sector {} sub {}  u={:.3} v={:.3}  {}",
            theta.to_degrees(),
            hit.sector,
            hit.subsector.index,
            hit.duty.u,
            hit.duty.v,
            parts.join("  ")
        );
    }
}
