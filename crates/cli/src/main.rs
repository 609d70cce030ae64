use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linegeom::geom2::EPS;
use linegeom::{GeomCfg, Intersection, Line, Point2};
use serde_json::{json, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod args;
mod provenance;

use args::{eps_arg, line_arg, point_arg, LineOut};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Intersections and orthogonals of 2D lines")]
struct Cmd {
    /// Absolute tolerance for slope/intercept/coordinate comparisons
    #[arg(long, global = true, default_value_t = EPS, value_parser = eps_arg)]
    eps: f64,

    /// Also write the JSON result here, with a provenance sidecar next to it
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Line through two points (`x,y`)
    Through {
        #[arg(value_parser = point_arg, allow_hyphen_values = true)]
        p1: Point2,
        #[arg(value_parser = point_arg, allow_hyphen_values = true)]
        p2: Point2,
    },
    /// Intersection of two lines (`a,b` or `x=c`)
    Intersect {
        #[arg(value_parser = line_arg, allow_hyphen_values = true)]
        first: Line,
        #[arg(value_parser = line_arg, allow_hyphen_values = true)]
        second: Line,
    },
    /// Line through a point orthogonal to a line
    Orthogonal {
        #[arg(value_parser = line_arg, allow_hyphen_values = true)]
        line: Line,
        #[arg(value_parser = point_arg, allow_hyphen_values = true)]
        point: Point2,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    // stdout carries the JSON result only.
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = GeomCfg::with_eps(cmd.eps).context("--eps must be finite and positive")?;
    let (name, params, result) = match cmd.action {
        Action::Through { p1, p2 } => (
            "through",
            json!({ "p1": [p1.x, p1.y], "p2": [p2.x, p2.y] }),
            through(p1, p2, cfg),
        ),
        Action::Intersect { first, second } => (
            "intersect",
            json!({ "first": LineOut::from(first), "second": LineOut::from(second) }),
            intersect(first, second, cfg),
        ),
        Action::Orthogonal { line, point } => (
            "orthogonal",
            json!({ "line": LineOut::from(line), "point": [point.x, point.y] }),
            orthogonal(line, point, cfg),
        ),
        Action::Report => ("report", json!({}), report()),
    };
    emit(&mut std::io::stdout().lock(), &result)?;
    if let Some(out) = cmd.out {
        let mut params = params;
        params["eps"] = json!(cmd.eps);
        write_output(&out, name, params, &result)?;
    }
    Ok(())
}

fn emit<W: Write>(w: &mut W, result: &Value) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, result)?;
    writeln!(w)?;
    w.flush()?;
    Ok(())
}

fn through(p1: Point2, p2: Point2, cfg: GeomCfg) -> Value {
    let line = Line::through_with(p1, p2, cfg);
    tracing::info!(?p1, ?p2, ?line, "through");
    json!(LineOut::from(line))
}

fn intersect(first: Line, second: Line, cfg: GeomCfg) -> Value {
    let kind = match first.classify_with(&second, cfg) {
        Intersection::Point(_) => "point",
        Intersection::Parallel => "parallel",
        Intersection::Coincident => "coincident",
    };
    let point = first.find_intersection_with(&second, cfg);
    tracing::info!(?first, ?second, kind, ?point, "intersect");
    json!({
        "kind": kind,
        "point": point.map(|p| [p.x, p.y]),
    })
}

fn orthogonal(line: Line, point: Point2, cfg: GeomCfg) -> Value {
    let orth = line.find_orthogonal_with(point, cfg);
    tracing::info!(?line, ?point, ?orth, "orthogonal");
    json!(LineOut::from(orth))
}

fn report() -> Value {
    provenance::document("report", json!({}), Vec::new())
}

fn write_output(out: &Path, name: &str, params: Value, result: &Value) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(result)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let prov = provenance::write_sidecar(out, provenance::Payload::new(name, params))?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote output");
    Ok(())
}
