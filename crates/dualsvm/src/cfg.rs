//! Tolerance configuration.
//!
//! Policy
//! - Defaults are fixed constants; callers rarely need to change them.
//!   Equality checks are relative (see `algebra::approx_eq`), containment
//!   checks use absolute slack on duty ratios.

/// Tolerances for topology build and point location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvmCfg {
    /// A basis with `|det| <= eps_det` is degenerate.
    pub eps_det: f64,
    /// Relative tolerance for the reflection invariant.
    pub eps_sym: f64,
    /// Slack on `u >= 0`, `v >= 0`, `u + v <= 1` and `u, v <= 1`.
    pub eps_feas: f64,
}

impl Default for SvmCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_sym: 1e-9,
            eps_feas: 1e-9,
        }
    }
}
