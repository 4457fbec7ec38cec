pub mod commands;
pub mod error;

use std::process::ExitCode;

use clap::Parser;
use commands::Commands;
use densitometry::{env, logger};
use error_iter::ErrorIter as _;
use log::error;

/// Tissue and bone mineral density from phantom calibrated grayscale scans
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> ExitCode {
    env::init();
    logger::init();

    let cli = Cli::parse();

    let (command_name, outcome) = match cli.command {
        Commands::Analyze(args) => ("analyze", commands::analyze::run(args).await),
        Commands::Calibrate(args) => ("calibrate", commands::calibrate::run(args)),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_error(command_name, err);
            ExitCode::FAILURE
        }
    }
}

fn log_error<E: std::error::Error + 'static>(command_name: &str, err: E) {
    error!("{command_name} failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
