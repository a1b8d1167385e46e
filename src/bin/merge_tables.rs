//! CLI entry point for merging same-named result tables

use cellbatch::io::cli::{MergeCli, MergeProcessor};
use cellbatch::io::logging::init_logging;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = MergeCli::parse();
    init_logging(cli.verbose);

    match MergeProcessor::new(cli).process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
