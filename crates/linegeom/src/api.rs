//! Curated entry points for callers that do not want to name `Line` methods.
//!
//! Thin free-function wrappers over `geom2`; behavior is defined there.

pub use crate::geom2::rand::{draw_line, draw_point, LineCfg, Range1, ReplayToken};
pub use crate::geom2::{approx_eq, approx_eq_eps, GeomCfg, Intersection, Line, Point2};

use nalgebra::Vector2;

/// Pre: none.
/// Post: the line through `p` and `q`; vertical when `p.x ≈ q.x`.
#[inline]
pub fn line_through(p: Point2, q: Point2) -> Line {
    Line::through(p, q)
}

/// Post: `None` iff the lines are distinct parallels.
#[inline]
pub fn intersect(l1: &Line, l2: &Line) -> Option<Point2> {
    l1.find_intersection(l2)
}

/// Post: `Some` only for a unique crossing; coincident lines give `None`.
#[inline]
pub fn crossing(l1: &Line, l2: &Line) -> Option<Point2> {
    l1.classify(l2).point()
}

/// Post: the returned line contains `p` and is perpendicular to `l`.
#[inline]
pub fn orthogonal(l: &Line, p: Point2) -> Line {
    l.find_orthogonal(p)
}

/// Unit direction of `l` (`(0, 1)` for vertical lines).
pub fn direction(l: &Line) -> Vector2<f64> {
    match l.slope() {
        Some(a) => Vector2::new(1.0, a).normalize(),
        None => Vector2::new(0.0, 1.0),
    }
}

/// Euclidean distance from `p` to `l`.
pub fn distance(l: &Line, p: Point2) -> f64 {
    (p - l.foot_of_perpendicular(p)).norm()
}
