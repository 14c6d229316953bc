//! generate_report - render video quality charts and recommend a bitrate

use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

mod commands;

/// Video quality report generator.
///
/// Reads an encoding metrics CSV, writes PNG charts into the output
/// directory, and prints the optimal-bitrate recommendation.
#[derive(Parser)]
#[command(name = "generate_report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Metrics CSV with bitrate_kbps, file_size_mb, psnr_db, ssim columns
    csv_path: PathBuf,

    /// Directory for the generated charts (created if absent)
    #[arg(default_value = "../results/graphs")]
    output_dir: PathBuf,

    /// Verbose output (per-metric statistics and the Pareto front)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Argument errors exit with code 1; help and version exit cleanly.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            std::process::exit(0);
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = commands::report::run(cli.csv_path, cli.output_dir, cli.verbose) {
        eprintln!("✗ {e:#}");
        std::process::exit(1);
    }
}
