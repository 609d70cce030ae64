//! Basic 2D types and tolerances used by the line algorithms.
//!
//! - `Point2`: immutable coordinate pair, nalgebra's `Point2<f64>`.
//! - `GeomCfg`: carries the comparison epsilon through `*_with` entry points.
//! - `Intersection`: classification of a pair of lines.
//!
//! Code cross-refs: `line::Line`, `cfg::{EPS, approx_eq_eps}`

use super::cfg::EPS;

/// Point in the plane. Value type, freely copied.
pub type Point2 = nalgebra::Point2<f64>;

/// Geometry configuration (tolerances).
///
/// Invariant: `eps` is finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Absolute tolerance for slope, intercept and coordinate comparisons.
    pub(crate) eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: EPS }
    }
}

impl GeomCfg {
    /// `None` unless `eps` is finite and `> 0`.
    #[inline]
    pub fn with_eps(eps: f64) -> Option<Self> {
        (eps.is_finite() && eps > 0.0).then_some(Self { eps })
    }

    #[inline]
    pub fn eps(&self) -> f64 {
        self.eps
    }
}

/// Outcome of intersecting two lines.
///
/// `Line::find_intersection` collapses `Coincident` onto the point `(0, b)`;
/// match on this enum when the infinitely-many-solutions case matters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    /// Unique crossing point.
    Point(Point2),
    /// Distinct parallel lines (no common point).
    Parallel,
    /// Same line up to tolerance.
    Coincident,
}

impl Intersection {
    #[inline]
    pub fn point(self) -> Option<Point2> {
        match self {
            Intersection::Point(p) => Some(p),
            _ => None,
        }
    }
}
