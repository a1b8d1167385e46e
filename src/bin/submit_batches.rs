//! CLI entry point for submitting CellProfiler batches to Slurm

use cellbatch::io::cli::{SubmitCli, SubmitProcessor};
use cellbatch::io::logging::init_logging;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = SubmitCli::parse();
    init_logging(cli.verbose);

    match SubmitProcessor::new(cli).process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
