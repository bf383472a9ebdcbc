//! # rdfsmooth
//!
//! Command-line interface: smooth an RDF curve three ways, plot the
//! comparison, and save each smoothed curve next to the input.

use anyhow::{Context, Result};
use clap::Parser;
use rdfsmooth::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Suffix of the comparison plot written next to the input.
const PLOT_SUFFIX: &str = "_smoothed";

#[derive(Parser, Debug)]
#[command(name = "rdfsmooth", version)]
#[command(about = "Apply smoothing to RDF data and compare algorithms", long_about = None)]
struct Cli {
    /// Path to the input .dat file (two whitespace-separated columns: r, g(r))
    input: PathBuf,

    /// Moving average window size
    #[arg(long, default_value_t = 50)]
    window: usize,

    /// Spline smoothing factor (upper bound on the residual sum of squares)
    #[arg(long = "spline-s", default_value_t = 110.0, allow_negative_numbers = true)]
    spline_s: f64,

    /// Gaussian filter sigma, in samples
    #[arg(long = "gauss-sigma", default_value_t = 9.0, allow_negative_numbers = true)]
    gauss_sigma: f64,

    /// Gaussian boundary mode (reflect, mirror, nearest, wrap, constant)
    #[arg(long = "gauss-mode", default_value = "reflect")]
    gauss_mode: BoundaryMode,

    /// Gaussian kernel truncation, in sigmas
    #[arg(long = "gauss-truncate", default_value_t = 4.0, allow_negative_numbers = true)]
    gauss_truncate: f64,

    /// Where to write the comparison plot (default: <input-base>_smoothed.svg)
    #[arg(long, conflicts_with = "no_plot")]
    plot: Option<PathBuf>,

    /// Skip rendering the comparison plot
    #[arg(long = "no-plot")]
    no_plot: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    // Parameters are checked before touching the file system.
    let model = RdfSmoother::new()
        .window(cli.window)
        .spline_s(cli.spline_s)
        .gauss_sigma(cli.gauss_sigma)
        .gauss_mode(cli.gauss_mode)
        .gauss_truncate(cli.gauss_truncate)
        .build()
        .context("invalid smoothing parameters")?;
    debug!(config = ?model.config(), "configuration resolved");

    let data = read_dataset(&cli.input)
        .with_context(|| format!("failed to load '{}'", cli.input.display()))?;
    info!(rows = data.len(), "input loaded");

    let result = model
        .smooth_dataset(&data)
        .context("smoothing failed")?;
    debug!("\n{}", result);

    let paths = OutputPaths::for_input(&cli.input);

    if !cli.no_plot {
        let plot_path = cli
            .plot
            .clone()
            .unwrap_or_else(|| paths.sibling(PLOT_SUFFIX, "svg"));
        render_overlay(&plot_path, &result, &PlotOptions::default())
            .with_context(|| format!("failed to render '{}'", plot_path.display()))?;
        println!("Comparison plot saved as {}", plot_path.display());
    }

    write_outputs(&result, &paths).context("failed to save smoothed data")?;

    println!(
        "Smoothed data saved as {}_smoothed_[ma|spline|gaussian].dat",
        paths.base.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
