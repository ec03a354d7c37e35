//! binclass-report command line
//!
//! ```text
//! binclass-report                      # report over ./saved
//! binclass-report --no-plots           # same, tables only
//! binclass-report report --results-dir runs --no-plots
//! binclass-report demo --seed 0 --plot demo.png
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use binclass_report::config::{ReportConfig, DEFAULT_PREDICTION_FILE, DEFAULT_RESULTS_DIR};
use binclass_report::demo::{run_demo, DEFAULT_SAMPLES, DEFAULT_SEED};
use binclass_report::pipeline::generate_report;
use binclass_report::plot::render_roc;

#[derive(Debug, Parser)]
#[command(name = "binclass-report")]
#[command(about = "Rank binary-classification experiments by F1 and export Markdown/HTML tables with ROC plots")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    /// Report options used when no subcommand is given
    #[command(flatten)]
    report: ReportArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate every experiment and write the reports (default)
    Report(ReportArgs),
    /// Evaluate pseudo-random labels and print the EER
    Demo(DemoArgs),
}

#[derive(Debug, Args)]
struct ReportArgs {
    /// Directory whose subdirectories hold prediction files
    #[arg(long, default_value = DEFAULT_RESULTS_DIR)]
    results_dir: PathBuf,

    /// Directory for `<experiment>.png` ROC plots
    #[arg(long, default_value = ".")]
    plot_dir: PathBuf,

    /// Prediction file name inside each experiment directory
    #[arg(long, default_value = DEFAULT_PREDICTION_FILE)]
    prediction_file: String,

    /// Skip ROC plot rendering
    #[arg(long, default_value_t = false)]
    no_plots: bool,
}

impl ReportArgs {
    fn to_config(&self) -> ReportConfig {
        ReportConfig::builder()
            .results_dir(&self.results_dir)
            .plot_dir(&self.plot_dir)
            .prediction_file(self.prediction_file.as_str())
            .render_plots(!self.no_plots)
            .build()
    }
}

#[derive(Debug, Args)]
struct DemoArgs {
    /// Random seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of samples
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Write the ROC plot to this file
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn report(args: &ReportArgs) -> Result<()> {
    let config = args.to_config();
    let summary = generate_report(&config).with_context(|| {
        format!(
            "failed to generate report from {}",
            config.results_dir().display()
        )
    })?;

    println!("Exported: {}", summary.markdown_path.display());
    println!("Exported: {}", summary.html_path.display());
    Ok(())
}

fn demo(args: &DemoArgs) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let outcome = run_demo(&mut rng, args.samples).context("demo evaluation failed")?;
    println!("EER: {:.3}", outcome.eer);

    if let Some(path) = &args.plot {
        render_roc(path, &outcome.roc, outcome.roc_auc)
            .with_context(|| format!("failed to render {}", path.display()))?;
        println!("Exported: {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        None => report(&cli.report),
        Some(Command::Report(args)) => report(&args),
        Some(Command::Demo(args)) => demo(&args),
    }
}
