//! mobius: compute and render a Möbius strip from the command line.
//!
//! Builds the strip, prints its properties, and saves the surface and
//! wireframe figure side by side.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=mobius_rs=info` - Summary figures
//! - `RUST_LOG=mobius_rs=debug` - Every integration and file write
//!
//! # Example
//!
//! ```bash
//! # Defaults: R = 2, w = 1, n = 100, figure in mobius_strip.png
//! mobius
//!
//! # Finer strip, SVG figure, mesh dump
//! mobius --resolution 400 --output strip.svg --csv mesh.csv -v
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use mobius_rs::output::export::CsvMetadata;
use mobius_rs::output::{CsvConfig, CsvExporter, Exporter, PlotConfig, StripPlotter};
use mobius_rs::strip::{MobiusStrip, EDGE_OVERLAY_SAMPLES};

/// mobius - Möbius strip surface area and edge length.
#[derive(Parser)]
#[command(name = "mobius")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Center radius R
    #[arg(long, short = 'R', default_value_t = 2.0)]
    radius: f64,

    /// Strip width w
    #[arg(long, short = 'w', default_value_t = 1.0)]
    width: f64,

    /// Angular resolution n (width resolution is n/5)
    #[arg(long, short = 'n', default_value_t = 100)]
    resolution: usize,

    /// Figure path (.png or .svg)
    #[arg(long, short, default_value = "mobius_strip.png")]
    output: PathBuf,

    /// Skip rendering the figure
    #[arg(long)]
    no_plot: bool,

    /// Also export the mesh as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Panel width in pixels (the figure holds two panels)
    #[arg(long, default_value_t = 1200)]
    panel_width: u32,

    /// Panel height in pixels
    #[arg(long, default_value_t = 1000)]
    panel_height: u32,

    /// Suppress the summary and all log output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG wins over -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "mobius_rs=info,mobius=info",
            2 => "mobius_rs=debug,mobius=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let strip = MobiusStrip::new(cli.radius, cli.width, cli.resolution)
        .context("invalid strip parameters")?;

    let summary = strip.summary().context("failed to integrate strip properties")?;
    if !cli.quiet {
        println!("{summary}");
    }

    if let Some(csv_path) = &cli.csv {
        let mut metadata = CsvMetadata::from_parameters(strip.parameters());
        metadata.surface_area = Some(summary.surface_area);
        metadata.edge_length = Some(summary.edge_length);

        CsvExporter::new(CsvConfig::default().with_metadata(metadata))
            .export_mesh(strip.mesh(), csv_path)
            .with_context(|| format!("failed to export mesh to {}", csv_path.display()))?;
        tracing::info!(path = %csv_path.display(), "mesh exported");
    }

    if !cli.no_plot {
        let edge = strip.edge_polyline(EDGE_OVERLAY_SAMPLES);
        let plotter = StripPlotter::new(PlotConfig::default().size(cli.panel_width, cli.panel_height));

        plotter
            .render_side_by_side(strip.mesh(), &edge, &cli.output)
            .with_context(|| format!("failed to render {}", cli.output.display()))?;
        tracing::info!(path = %cli.output.display(), "figure saved");
    }

    Ok(())
}
