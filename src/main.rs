use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use graverobber::output::{self, Verbosity};
use graverobber::{ScanContext, run};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "graverobber",
    version = graverobber::VERSION,
    about = "Sweeps the current directory tree into a single report",
    long_about = "Walks the directory tree below the current directory, skips binary assets, \
                  lockfiles, build artifacts and version-control internals, and writes a tree \
                  listing plus a whitespace-stripped capture of every file into report.txt"
)]
struct Cli {
    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress informational messages
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    if let Err(e) = run_scan() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run_scan() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if cli.quiet {
        output::set_verbosity(Verbosity::Quiet);
    } else if cli.verbose {
        output::set_verbosity(Verbosity::Verbose);
    }

    let ctx = ScanContext::new()?;
    run(&ctx)
}
