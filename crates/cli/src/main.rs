use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use quickhull2::geom2::cfg::I64_EXACT_BOUND;
use quickhull2::geom2::rand::{sample, CloudCfg, CloudFamily, ReplayToken};
use quickhull2::geom2::{compute_hull, validate_hull, HullBuilder, Point};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;

use points_io::ColumnCoord;
use provenance::{write_sidecar, Payload, Summary};

#[derive(Parser)]
#[command(name = "hull")]
#[command(about = "Convex hulls of planar point files")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Debug-level logs (builder statistics included)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file (.csv, .parquet, .json) and write it as JSON
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Numeric::Float)]
        numeric: Numeric,
        /// Check subset, convexity and containment before writing
        #[arg(long)]
        verify: bool,
    },
    /// Write a seeded point cloud
    Gen {
        #[arg(long, value_enum, default_value_t = Family::SquareInterior)]
        family: Family,
        #[arg(long, default_value_t = 1000)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Half side length or radius
        #[arg(long, default_value_t = 100.0)]
        extent: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Numeric {
    Float,
    Int,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Family {
    SquareInterior,
    Square,
    Disk,
    Circle,
    Grid,
}

impl From<Family> for CloudFamily {
    fn from(f: Family) -> Self {
        match f {
            Family::SquareInterior => CloudFamily::SquareWithInterior,
            Family::Square => CloudFamily::Square,
            Family::Disk => CloudFamily::Disk,
            Family::Circle => CloudFamily::Circle,
            Family::Grid => CloudFamily::Grid,
        }
    }
}

/// Written to `--out` by `hull run`.
#[derive(Debug, Serialize)]
struct HullReport<T> {
    numeric: Numeric,
    input_points: usize,
    vertices: usize,
    area: f64,
    verified: bool,
    hull: Vec<[T; 2]>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Run {
            input,
            out,
            numeric,
            verify,
        } => run(&input, &out, numeric, verify, cmd.tag),
        Action::Gen {
            family,
            n,
            seed,
            extent,
            out,
        } => gen(family, n, seed, extent, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn run(input: &Path, out: &Path, numeric: Numeric, verify: bool, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), ?numeric, verify, tag = ?tag, "run");
    let summary = match numeric {
        Numeric::Float => {
            let points = points_io::read_points::<f64>(input)?;
            write_hull(points, numeric, verify, out)?
        }
        Numeric::Int => {
            let points = points_io::read_points::<i64>(input)?;
            if let Some(p) = points.iter().find(|p| !p.in_exact_range()) {
                bail!("point {p} is outside the exact integer range (|coord| < {I64_EXACT_BOUND})");
            }
            write_hull(points, numeric, verify, out)?
        }
    };
    tracing::info!(?summary, "hull_written");

    let payload = Payload::new(
        serde_json::json!({
            "input": input.to_string_lossy(),
            "numeric": numeric,
            "verify": verify,
        }),
        summary,
    )
    .with_tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

/// Computes, optionally verifies and writes the hull.
fn write_hull<T: ColumnCoord>(
    points: Vec<Point<T>>,
    numeric: Numeric,
    verify: bool,
    out: &Path,
) -> Result<Summary> {
    let input_points = points.len();
    let hull = if verify {
        let hull = compute_hull(&points)?;
        validate_hull(&points, &hull).map_err(|v| anyhow!("hull verification failed: {v}"))?;
        hull
    } else {
        HullBuilder::new(points).build()?
    };
    let report = HullReport {
        numeric,
        input_points,
        vertices: hull.len(),
        area: hull.area(),
        verified: verify,
        hull: hull.iter().map(|&p| p.into()).collect(),
    };
    points_io::ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(Summary::Hull {
        input_points,
        vertices: report.vertices,
        area: report.area,
    })
}

fn gen(
    family: Family,
    n: usize,
    seed: u64,
    extent: f64,
    out: &Path,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(?family, n, seed, extent, out = %out.display(), tag = ?tag, "gen");
    let cfg = CloudCfg {
        family: family.into(),
        count: n,
        half_extent: extent,
        ..CloudCfg::default()
    };
    let points = sample(cfg, ReplayToken::new(seed))?;
    points_io::write_points(out, &points)?;

    let payload = Payload::new(
        serde_json::json!({
            "family": format!("{family:?}"),
            "n": n,
            "seed": seed,
            "extent": extent,
        }),
        Summary::Cloud {
            points: points.len(),
        },
    )
    .with_tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "quickhull2": quickhull2::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
