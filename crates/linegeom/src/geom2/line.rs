//! Infinite lines in the plane: slope-intercept or vertical.
//!
//! Purpose
//! - Represent `y = a x + b` and `x = c` as two variants of one enum, so no
//!   code path can read a slope off a vertical line.
//! - Provide intersection and orthogonal-through-point with eps-aware branching.
//!
//! Numerics
//! - Parallel/vertical/horizontal branches are decided before any division, so
//!   `a - a'` and `a` are only divided by when they are not approximately zero.
//! - Coincident lines intersect at the representative point `(0, b)` in
//!   `find_intersection`. Use `classify` to distinguish that case.
//!
//! Code cross-refs: `types::{Point2, GeomCfg, Intersection}`, `cfg::approx_eq_eps`

use super::cfg::approx_eq_eps;
use super::types::{GeomCfg, Intersection, Point2};

/// Line in the plane.
///
/// Invariants:
/// - `Sloped { a, b }` is the graph of `y = a x + b`.
/// - `Vertical { x }` is the set `{ (x, y) : y ∈ R }`.
/// - Values are immutable; every operation returns a fresh `Line` or point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Line {
    Sloped { a: f64, b: f64 },
    Vertical { x: f64 },
}

impl Line {
    /// `y = a x + b`.
    #[inline]
    pub fn new(a: f64, b: f64) -> Self {
        Line::Sloped { a, b }
    }

    /// `x = x0`.
    #[inline]
    pub fn vertical(x: f64) -> Self {
        Line::Vertical { x }
    }

    /// Line through two points.
    ///
    /// Points sharing an abscissa (within tolerance) give a vertical line at
    /// `pt1.x`. That includes `pt1 == pt2`: the degenerate pair is accepted and
    /// yields the vertical through the point.
    #[inline]
    pub fn through(pt1: Point2, pt2: Point2) -> Self {
        Self::through_with(pt1, pt2, GeomCfg::default())
    }

    pub fn through_with(pt1: Point2, pt2: Point2, cfg: GeomCfg) -> Self {
        // Exact match first: identical abscissae are vertical whatever the eps.
        if pt1.x == pt2.x || approx_eq_eps(pt1.x, pt2.x, cfg.eps) {
            return Line::Vertical { x: pt1.x };
        }
        let a = (pt1.y - pt2.y) / (pt1.x - pt2.x);
        let b = pt2.y - a * pt2.x;
        Line::Sloped { a, b }
    }

    /// Slope `a`, or `None` for vertical lines.
    #[inline]
    pub fn slope(&self) -> Option<f64> {
        match *self {
            Line::Sloped { a, .. } => Some(a),
            Line::Vertical { .. } => None,
        }
    }

    /// Intercept `b` for sloped lines; the constant abscissa for vertical ones.
    #[inline]
    pub fn intercept(&self) -> f64 {
        match *self {
            Line::Sloped { b, .. } => b,
            Line::Vertical { x } => x,
        }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Line::Vertical { .. })
    }

    /// Ordinate at `x`; `None` for vertical lines.
    #[inline]
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match *self {
            Line::Sloped { a, b } => Some(a * x + b),
            Line::Vertical { .. } => None,
        }
    }

    /// Point lies on the line within `eps` (vertical: in x; sloped: in y).
    #[inline]
    pub fn contains_eps(&self, pt: Point2, eps: f64) -> bool {
        match *self {
            Line::Sloped { a, b } => approx_eq_eps(a * pt.x + b, pt.y, eps),
            Line::Vertical { x } => approx_eq_eps(pt.x, x, eps),
        }
    }

    #[inline]
    pub fn contains(&self, pt: Point2) -> bool {
        self.contains_eps(pt, GeomCfg::default().eps)
    }

    /// Both vertical, or both sloped with approximately equal slopes.
    pub fn is_parallel(&self, other: &Line) -> bool {
        self.is_parallel_with(other, GeomCfg::default())
    }

    pub fn is_parallel_with(&self, other: &Line, cfg: GeomCfg) -> bool {
        match (*self, *other) {
            (Line::Vertical { .. }, Line::Vertical { .. }) => true,
            (Line::Sloped { a: a1, .. }, Line::Sloped { a: a2, .. }) => {
                approx_eq_eps(a1, a2, cfg.eps)
            }
            _ => false,
        }
    }

    /// Classify the pair: unique point, distinct parallels, or coincident.
    pub fn classify(&self, other: &Line) -> Intersection {
        self.classify_with(other, GeomCfg::default())
    }

    pub fn classify_with(&self, other: &Line, cfg: GeomCfg) -> Intersection {
        match (*self, *other) {
            (Line::Vertical { x: x1 }, Line::Vertical { x: x2 }) => same_or_parallel(x1, x2, cfg),
            (Line::Sloped { a: a1, b: b1 }, Line::Sloped { a: a2, b: b2 })
                if approx_eq_eps(a1, a2, cfg.eps) =>
            {
                same_or_parallel(b1, b2, cfg)
            }
            (Line::Vertical { x }, Line::Sloped { a, b })
            | (Line::Sloped { a, b }, Line::Vertical { x }) => {
                Intersection::Point(Point2::new(x, a * x + b))
            }
            (Line::Sloped { a: a1, b: b1 }, Line::Sloped { a: a2, b: b2 }) => {
                // a1 - a2 is at least eps here.
                let x = (b2 - b1) / (a1 - a2);
                Intersection::Point(Point2::new(x, a1 * x + b1))
            }
        }
    }

    /// Intersection point, or `None` for distinct parallel lines.
    ///
    /// Coincident lines return `(0, b)` with `b = self.intercept()`.
    #[inline]
    pub fn find_intersection(&self, other: &Line) -> Option<Point2> {
        self.find_intersection_with(other, GeomCfg::default())
    }

    pub fn find_intersection_with(&self, other: &Line, cfg: GeomCfg) -> Option<Point2> {
        match self.classify_with(other, cfg) {
            Intersection::Point(p) => Some(p),
            Intersection::Coincident => Some(Point2::new(0.0, self.intercept())),
            Intersection::Parallel => None,
        }
    }

    /// Line through `pt` perpendicular to `self`.
    ///
    /// - vertical → horizontal `y = pt.y`
    /// - horizontal (`a ≈ 0`) → vertical `x = pt.x`
    /// - otherwise slope `-1/a` through `pt`
    #[inline]
    pub fn find_orthogonal(&self, pt: Point2) -> Line {
        self.find_orthogonal_with(pt, GeomCfg::default())
    }

    pub fn find_orthogonal_with(&self, pt: Point2, cfg: GeomCfg) -> Line {
        match *self {
            Line::Vertical { .. } => Line::new(0.0, pt.y),
            Line::Sloped { a, .. } if a == 0.0 || approx_eq_eps(a, 0.0, cfg.eps) => {
                Line::through_with(pt, pt, cfg)
            }
            Line::Sloped { a, .. } => Line::new(-1.0 / a, (1.0 / a) * pt.x + pt.y),
        }
    }

    /// Orthogonal projection of `pt` onto the line.
    ///
    /// Closed form, so it is defined for every line and point; agrees with
    /// `self ∩ self.find_orthogonal(pt)` up to rounding.
    pub fn foot_of_perpendicular(&self, pt: Point2) -> Point2 {
        match *self {
            Line::Vertical { x } => Point2::new(x, pt.y),
            Line::Sloped { a, b } => {
                let x = (pt.x + a * (pt.y - b)) / (1.0 + a * a);
                Point2::new(x, a * x + b)
            }
        }
    }
}

/// Parallel pair: coincident iff the intercepts agree.
#[inline]
fn same_or_parallel(b1: f64, b2: f64, cfg: GeomCfg) -> Intersection {
    if approx_eq_eps(b1, b2, cfg.eps) {
        Intersection::Coincident
    } else {
        Intersection::Parallel
    }
}
