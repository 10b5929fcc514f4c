//! Numeric tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants, like the solver defaults in `MveeCfg`. Only `tol` and
//!   `max_iterations` are caller-facing; the values here guard the primitives.

/// LU pivots at or below `n * PIVOT_EPS * max|m_ij|` are treated as zero.
pub(crate) const PIVOT_EPS: f64 = f64::EPSILON;
/// Relative asymmetry accepted by `symmetric_eigen` before debug builds complain.
pub(crate) const SYM_EPS: f64 = 1e-9;
/// Minimum number of distinct input points for a planar hull (d + 1 with d = 2).
pub(crate) const MIN_HULL_POINTS: usize = 3;
/// Slack on `(p − c)ᵗA(p − c) ≤ 1` when checking containment at `tol = 1e-4`.
#[cfg(test)]
pub(crate) const CONTAINMENT_EPS: f64 = 1e-3;
