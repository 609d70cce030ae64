//! Argument syntax for points and lines.
//!
//! - point: `x,y`
//! - line: `a,b` for `y = a x + b`, or `x=c` for a vertical line

use anyhow::{anyhow, bail, Context, Result};
use linegeom::{Line, Point2};
use serde::Serialize;

fn parse_f64(s: &str) -> Result<f64> {
    let t = s.trim();
    t.parse::<f64>()
        .with_context(|| format!("invalid number {t:?}"))
}

fn parse_pair(s: &str) -> Result<(f64, f64)> {
    let (l, r) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected two comma-separated numbers, got {s:?}"))?;
    Ok((parse_f64(l)?, parse_f64(r)?))
}

pub fn parse_point(s: &str) -> Result<Point2> {
    let (x, y) = parse_pair(s)?;
    Ok(Point2::new(x, y))
}

pub fn parse_line(s: &str) -> Result<Line> {
    let t = s.trim();
    if let Some(rest) = t.strip_prefix("x=") {
        return Ok(Line::vertical(parse_f64(rest)?));
    }
    if t.starts_with('x') {
        bail!("vertical lines are written x=c, got {s:?}");
    }
    let (a, b) = parse_pair(t)?;
    Ok(Line::new(a, b))
}

/// clap value parser for `--eps`: finite and strictly positive.
pub fn eps_arg(s: &str) -> Result<f64, String> {
    let eps = parse_f64(s).map_err(|e| format!("{e:#}"))?;
    if !(eps.is_finite() && eps > 0.0) {
        return Err(format!("eps must be finite and positive, got {eps}"));
    }
    Ok(eps)
}

/// clap value parser adaptor.
pub fn point_arg(s: &str) -> Result<Point2, String> {
    parse_point(s).map_err(|e| format!("{e:#}"))
}

/// clap value parser adaptor.
pub fn line_arg(s: &str) -> Result<Line, String> {
    parse_line(s).map_err(|e| format!("{e:#}"))
}

/// JSON form of a line.
#[derive(Debug, Serialize, PartialEq)]
pub struct LineOut {
    pub vertical: bool,
    pub slope: Option<f64>,
    pub intercept: f64,
}

impl From<Line> for LineOut {
    fn from(l: Line) -> Self {
        Self {
            vertical: l.is_vertical(),
            slope: l.slope(),
            intercept: l.intercept(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points_and_lines() {
        assert_eq!(parse_point(" 5, 3.5").unwrap(), Point2::new(5.0, 3.5));
        assert_eq!(parse_line("2,7").unwrap(), Line::new(2.0, 7.0));
        assert_eq!(parse_line("x=-4.5").unwrap(), Line::vertical(-4.5));
    }

    #[test]
    fn rejects_malformed() {
        assert!(parse_point("5").is_err());
        assert!(parse_point("a,1").is_err());
        assert!(parse_line("x:4").is_err());
        assert!(line_arg("1;2").unwrap_err().contains("comma-separated"));
        assert!(eps_arg("0").unwrap_err().contains("finite and positive"));
        assert!(eps_arg("inf").is_err());
        assert_eq!(eps_arg("1e-6"), Ok(1e-6));
    }

    #[test]
    fn line_out_shape() {
        let v: LineOut = Line::vertical(3.0).into();
        assert_eq!(
            v,
            LineOut {
                vertical: true,
                slope: None,
                intercept: 3.0
            }
        );
        let json = serde_json::to_value(LineOut::from(Line::new(-0.5, 5.5))).unwrap();
        assert_eq!(json["slope"], -0.5);
        assert_eq!(json["intercept"], 5.5);
        assert_eq!(json["vertical"], false);
    }
}
