//! Tolerance defaults and approximate comparison for 2D line geometry.
//!
//! Policy
//! - Every comparison of derived floats (slopes, intercepts, coordinates) goes
//!   through `approx_eq_eps`; exact `==` is reserved for stored inputs in tests.
//! - Epsilon equality is not transitive. Callers must not chain it.

/// Absolute tolerance used by `approx_eq` and `GeomCfg::default()`.
pub const EPS: f64 = 1e-9;

/// `|a - b| < eps`. NaN on either side compares unequal.
#[inline]
pub fn approx_eq_eps(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// `approx_eq_eps` at the default tolerance `EPS`.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_eps(a, b, EPS)
}
