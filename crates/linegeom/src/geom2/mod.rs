//! 2D line geometry (slope-intercept or vertical).
//!
//! Purpose
//! - Provide points and infinite lines with intersection and
//!   orthogonal-through-point, handling vertical, horizontal, parallel and
//!   coincident cases explicitly.
//! - Keep the API minimal and numerically explicit (eps-aware, no sentinels).
//!
//! Code cross-refs: `Line`, `Point2`, `Intersection`, `GeomCfg`, `approx_eq`

pub mod cfg;
mod line;
pub mod rand;
mod types;

pub use cfg::{approx_eq, approx_eq_eps, EPS};
pub use line::Line;
pub use types::{GeomCfg, Intersection, Point2};

#[cfg(test)]
mod tests;
