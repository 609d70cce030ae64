//! Points and infinite lines in the plane.
//!
//! A line is either `y = a x + b` or vertical `x = c`. The crate computes the
//! intersection of two lines and the line through a point orthogonal to a
//! given line, with eps-aware handling of vertical, horizontal, parallel and
//! coincident cases.
//!
//! Conventions
//! - No sentinels: "no intersection" is `None`, never a point at infinity.
//! - Coincident lines intersect at `(0, b)` in `Line::find_intersection`;
//!   `Line::classify` reports `Intersection::Coincident` instead.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{approx_eq, approx_eq_eps, GeomCfg, Intersection, Line, Point2};
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_line, draw_lines, draw_point, LineCfg, Range1, ReplayToken};
    pub use crate::geom2::{approx_eq, approx_eq_eps, GeomCfg, Intersection, Line, Point2, EPS};
    pub use nalgebra::Vector2 as Vec2;
}
