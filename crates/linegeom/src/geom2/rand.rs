//! Random lines and points in 2D (replay tokens).
//!
//! Purpose
//! - Small deterministic sampler for benches and experiments on line
//!   intersection/orthogonal numerics.
//!
//! Model
//! - With probability `vertical_prob` draw `x = c`, `c` uniform in `intercept`.
//! - Otherwise draw slope uniform in `slope` and intercept uniform in `intercept`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::{line::Line, types::Point2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Closed sampling interval `[lo, hi]`. Swapped bounds are reordered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range1 {
    pub lo: f64,
    pub hi: f64,
}

impl Range1 {
    #[inline]
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }
    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        let (lo, hi) = if self.lo <= self.hi {
            (self.lo, self.hi)
        } else {
            (self.hi, self.lo)
        };
        if lo == hi {
            return lo;
        }
        rng.gen_range(lo..=hi)
    }
}

/// Line sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct LineCfg {
    pub slope: Range1,
    pub intercept: Range1,
    /// Probability of a vertical line. Clamped to [0, 1].
    pub vertical_prob: f64,
}

impl Default for LineCfg {
    fn default() -> Self {
        Self {
            slope: Range1::new(-10.0, 10.0),
            intercept: Range1::new(-10.0, 10.0),
            vertical_prob: 0.1,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random line.
pub fn draw_line(cfg: LineCfg, tok: ReplayToken) -> Line {
    let mut rng = tok.to_std_rng();
    let p = cfg.vertical_prob.clamp(0.0, 1.0);
    if rng.gen::<f64>() < p {
        return Line::vertical(cfg.intercept.sample(&mut rng));
    }
    let a = cfg.slope.sample(&mut rng);
    let b = cfg.intercept.sample(&mut rng);
    Line::new(a, b)
}

/// Draw a point uniformly from the box `xs × ys`.
pub fn draw_point(xs: Range1, ys: Range1, tok: ReplayToken) -> Point2 {
    let mut rng = tok.to_std_rng();
    let x = xs.sample(&mut rng);
    let y = ys.sample(&mut rng);
    Point2::new(x, y)
}

/// Draw `n` lines with consecutive indices starting at `tok.index`.
pub fn draw_lines(cfg: LineCfg, tok: ReplayToken, n: usize) -> Vec<Line> {
    let mut out = Vec::with_capacity(n);
    let mut t = tok;
    for _ in 0..n {
        out.push(draw_line(cfg, t));
        t = t.next();
    }
    out
}
