//! Command-line interfaces for the table merger and the batch submitter

use crate::io::configuration::{
    DEFAULT_BATCH_SIZE, DEFAULT_LOG_DIR, DEFAULT_MEMORY, DEFAULT_NUM_CHANNELS,
    DEFAULT_TABLE_EXTENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressTracker;
use crate::merge::merger::{MergeReport, MergeRequest, SourceLayout, TableMerger};
use crate::submit::batch::ImageCountRule;
use crate::submit::runner::{JobRunner, SlurmRunner};
use crate::submit::submitter::{BatchSubmitter, SubmissionReport, SubmitConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "merge-tables")]
#[command(
    author,
    version,
    about = "Merge same-named CSV tables from several directories into one table per name"
)]
/// Command-line arguments for the table merger
pub struct MergeCli {
    /// Source directories followed by the output directory
    ///
    /// With --batch, give a single parent directory whose subdirectories are
    /// the batch outputs.
    #[arg(value_name = "DIR", num_args = 2.., required = true)]
    pub paths: Vec<PathBuf>,

    /// Treat the single source as a parent of batch subdirectories
    #[arg(short, long)]
    pub batch: bool,

    /// Table file extension, matched case-insensitively
    #[arg(short, long, default_value = DEFAULT_TABLE_EXTENSION)]
    pub extension: String,

    /// Log every directory entered and every file read or written
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl MergeCli {
    /// Source directories, every path but the last
    pub fn sources(&self) -> &[PathBuf] {
        self.paths
            .split_last()
            .map(|(_, sources)| sources)
            .unwrap_or_default()
    }

    /// Output directory, the last path
    pub fn output(&self) -> Option<&PathBuf> {
        self.paths.last()
    }

    /// Table extension without a leading dot
    pub fn table_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    /// Build the merge request described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if no output directory is given, if
    /// batch mode is given more than one source, or if the extension is empty
    pub fn request(&self) -> Result<MergeRequest> {
        let output = self.output().ok_or_else(|| {
            invalid_parameter("paths", &"", &"expected source and output directories")
        })?;
        let sources = self.sources();

        if sources.is_empty() {
            return Err(invalid_parameter(
                "paths",
                &output.display(),
                &"expected at least one source directory before the output directory",
            ));
        }

        if self.table_extension().is_empty() {
            return Err(invalid_parameter(
                "extension",
                &self.extension,
                &"must not be empty",
            ));
        }

        let layout = if self.batch {
            match sources {
                [parent] => SourceLayout::Batch(parent.clone()),
                _ => {
                    return Err(invalid_parameter(
                        "paths",
                        &sources.len(),
                        &"batch mode takes exactly one parent directory",
                    ));
                }
            }
        } else {
            SourceLayout::Flat(sources.to_vec())
        };

        Ok(MergeRequest {
            layout,
            output_dir: output.clone(),
            extension: self.table_extension().to_string(),
        })
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs a merge described by [`MergeCli`] and reports anomalies
pub struct MergeProcessor {
    cli: MergeCli,
}

impl MergeProcessor {
    /// Create a processor for the given arguments
    pub const fn new(cli: MergeCli) -> Self {
        Self { cli }
    }

    /// Merge tables and log any batch directory that held no data
    ///
    /// Directories without data are warnings, not failures.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are inconsistent or the merge fails
    pub fn process(&self) -> Result<MergeReport> {
        let request = self.cli.request()?;
        let extension = request.extension.clone();
        let merger = TableMerger::new(
            request,
            ProgressTracker::new(self.cli.should_show_progress()),
        );
        let report = merger.run()?;

        if !report.is_clean() {
            tracing::warn!(
                "{} directories contained no {extension} files:",
                report.empty_dirs.len()
            );
            for dir in &report.empty_dirs {
                tracing::warn!("  {}", dir.display());
            }
        }

        Ok(report)
    }
}

#[derive(Parser, Debug)]
#[command(name = "submit-batches")]
#[command(
    author,
    version,
    about = "Run CellProfiler using Slurm on batches of images"
)]
/// Command-line arguments for the batch submitter
pub struct SubmitCli {
    /// CellProfiler pipeline (.cppipe) file
    #[arg(value_name = "PIPELINE")]
    pub pipeline_file: PathBuf,

    /// Parent output directory for per-batch results
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Directory containing the input images
    #[arg(value_name = "IMAGE_DIR")]
    pub image_dir: PathBuf,

    /// Number of images to process in each batch
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Number of channel files per image
    #[arg(long, default_value_t = DEFAULT_NUM_CHANNELS)]
    pub num_channels: usize,

    /// Memory reservation for each job
    #[arg(long, default_value = DEFAULT_MEMORY)]
    pub memory: String,

    /// Directory for scheduler job logs
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,

    /// How the image count is derived from the file count
    #[arg(long, value_enum, default_value_t = ImageCountRule::Inclusive)]
    pub count_rule: ImageCountRule,

    /// Print each submission command
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl SubmitCli {
    /// Submission parameters described by the arguments
    pub fn config(&self) -> SubmitConfig {
        SubmitConfig {
            pipeline: self.pipeline_file.clone(),
            output_dir: self.output_dir.clone(),
            image_dir: self.image_dir.clone(),
            batch_size: self.batch_size,
            num_channels: self.num_channels,
            memory: self.memory.clone(),
            log_dir: self.log_dir.clone(),
            count_rule: self.count_rule,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs a submission described by [`SubmitCli`]
pub struct SubmitProcessor {
    cli: SubmitCli,
}

impl SubmitProcessor {
    /// Create a processor for the given arguments
    pub const fn new(cli: SubmitCli) -> Self {
        Self { cli }
    }

    /// Submit every batch with `sbatch`
    ///
    /// # Errors
    ///
    /// Returns the first validation or submission error
    pub fn process(&self) -> Result<SubmissionReport> {
        self.process_with(&mut SlurmRunner)
    }

    /// Submit every batch through `runner`
    ///
    /// # Errors
    ///
    /// Returns the first validation or submission error
    pub fn process_with<R: JobRunner>(&self, runner: &mut R) -> Result<SubmissionReport> {
        let submitter = BatchSubmitter::new(
            self.cli.config(),
            ProgressTracker::new(self.cli.should_show_progress()),
        );
        submitter.run(runner)
    }
}
