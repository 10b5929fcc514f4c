use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mvee::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;
mod report;

use provenance::{write_sidecar, Payload};
use report::FitReport;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull and minimum-volume enclosing ellipse of planar points")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Fit hull + MVEE to a point file and write a JSON result
    Fit {
        /// Points as .csv (columns x,y) or .json ([[x, y], ...])
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Stop once the weight update norm is at most this
        #[arg(long, default_value_t = MveeCfg::default().tol)]
        tol: f64,
        #[arg(long, default_value_t = MveeCfg::default().max_iterations)]
        max_iterations: usize,
        /// Also emit this many ellipse boundary samples
        #[arg(long)]
        boundary: Option<usize>,
    },
    /// Draw seeded Gaussian points on a canvas (clamped to its bounds)
    Sample {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = CanvasCfg::default().width)]
        width: f64,
        #[arg(long, default_value_t = CanvasCfg::default().height)]
        height: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Fit {
            input,
            out,
            tol,
            max_iterations,
            boundary,
        } => run_fit(
            &input,
            &out,
            MveeCfg {
                tol,
                max_iterations,
            },
            boundary,
        ),
        Action::Sample {
            count,
            width,
            height,
            seed,
            out,
        } => run_sample(count, CanvasCfg { width, height }, seed, &out),
        Action::Report => report(),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn run_fit(input: &Path, out: &Path, cfg: MveeCfg, boundary: Option<usize>) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        tol = cfg.tol,
        max_iterations = cfg.max_iterations,
        "fit"
    );
    let points = points_io::read_points(input)?;
    let fitted = match fit(&points, &cfg) {
        Ok(f) => f,
        Err(e) if e.is_degenerate() => {
            tracing::warn!(points = points.len(), error = %e, "no hull/ellipse for this input");
            return Err(e).with_context(|| format!("fitting {}", input.display()));
        }
        Err(e) => return Err(e.into()),
    };
    if !fitted.converged {
        tracing::warn!(
            iterations = fitted.iterations,
            "solver hit the iteration cap; writing best-effort ellipse"
        );
    }
    tracing::info!(
        hull = fitted.hull.len(),
        rx = fitted.ellipse.rx,
        ry = fitted.ellipse.ry,
        rotation_deg = fitted.ellipse.rotation_degrees(),
        converged = fitted.converged,
        "ellipse"
    );

    let doc = FitReport::new(&fitted, points.len(), &cfg, boundary);
    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(
        out,
        Payload::new(serde_json::json!({
            "command": "fit",
            "tol": cfg.tol,
            "max_iterations": cfg.max_iterations,
            "boundary": boundary,
        }))
        .with_input(input),
    )?;
    Ok(())
}

fn run_sample(count: usize, canvas: CanvasCfg, seed: u64, out: &Path) -> Result<()> {
    tracing::info!(
        count,
        width = canvas.width,
        height = canvas.height,
        seed,
        out = %out.display(),
        "sample"
    );
    let points = sample_canvas_points(count, &canvas, seed)?;
    points_io::write_points(out, &points)?;
    write_sidecar(
        out,
        Payload::new(serde_json::json!({
            "command": "sample",
            "count": count,
            "width": canvas.width,
            "height": canvas.height,
            "seed": seed,
        })),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "mvee_version": mvee::VERSION,
        "defaults": {
            "tol": MveeCfg::default().tol,
            "max_iterations": MveeCfg::default().max_iterations,
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
