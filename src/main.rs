//! docgate: gate workflow steps on complete ideation and plan documents.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, ValueEnum};
use docgate::{config, report, schema};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docgate")]
#[command(
    about = "Validate ideation and implementation plan docs against workflow requirements.",
    long_about = None
)]
struct Args {
    /// Path to ideation markdown file.
    #[arg(long, value_name = "PATH")]
    ideation: PathBuf,

    /// Path to implementation plan markdown file.
    #[arg(long, value_name = "PATH")]
    plan: PathBuf,

    /// Report format (defaults to the configured one)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Read settings from this file instead of ./docgate.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Exit status when the section registry fails its self check.
const EXIT_GATE_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    if let Err(e) = schema::check_registry() {
        println!("ERROR: the section schema registry is required to run this validator.");
        println!("DETAILS: {e}");
        return ExitCode::from(EXIT_GATE_FAILURE);
    }

    let cfg = match &args.config {
        Some(path) => config::Config::load_from(path),
        None => config::Config::load(),
    };

    // Override config with command line args
    let format = args.format.unwrap_or_else(|| {
        OutputFormat::from_str(&cfg.output_format, true).unwrap_or_else(|_| {
            tracing::warn!(format = %cfg.output_format, "unknown output format, using text");
            OutputFormat::Text
        })
    });

    let report = report::run_validation(&args.ideation, &args.plan);

    match format {
        OutputFormat::Text => print!("{}", report.render_text(cfg.separator_width)),
        OutputFormat::Json => match report.render_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::from(report.exit_code())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
