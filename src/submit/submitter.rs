//! Pre-flight validation and the per-batch submission loop

use crate::io::configuration::PIPELINE_EXTENSION;
use crate::io::error::{FsContext, Result, ToolError, invalid_parameter};
use crate::io::progress::ProgressTracker;
use crate::submit::batch::{BatchDescriptor, ImageCountRule, count_logical_images, partition};
use crate::submit::command::{JobSettings, JobSubmission};
use crate::submit::runner::JobRunner;
use std::path::{Path, PathBuf};

/// Parameters of one submission run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitConfig {
    /// CellProfiler pipeline file
    pub pipeline: PathBuf,
    /// Parent of the per-batch output directories
    pub output_dir: PathBuf,
    /// Directory holding the input images
    pub image_dir: PathBuf,
    /// Maximum logical images per job
    pub batch_size: usize,
    /// Files on disk per logical image
    pub num_channels: usize,
    /// Memory reservation per job
    pub memory: String,
    /// Directory receiving scheduler logs
    pub log_dir: PathBuf,
    /// Rule for deriving the logical image count
    pub count_rule: ImageCountRule,
}

/// Outcome of a completed submission run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    /// Logical images derived from the image directory
    pub total_images: usize,
    /// Batches accepted by the scheduler, in submission order
    pub submitted: Vec<BatchDescriptor>,
}

/// Validates inputs, partitions the image set and submits one job per batch
pub struct BatchSubmitter {
    config: SubmitConfig,
    progress: ProgressTracker,
}

impl BatchSubmitter {
    /// Create a submitter for `config` that reports through `progress`
    pub const fn new(config: SubmitConfig, progress: ProgressTracker) -> Self {
        Self { config, progress }
    }

    /// Check inputs and create output and log directories
    ///
    /// Paths are made absolute so the submitted jobs do not depend on the
    /// scheduler's working directory. No directory is created unless every
    /// check passes.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `batch_size` or `num_channels` is
    /// zero, [`ToolError::InvalidPipeline`] for a missing pipeline or one
    /// without the `.cppipe` extension, [`ToolError::ImageDirNotFound`] for a
    /// missing image directory, and a file system error if a directory cannot
    /// be created
    pub fn preflight(&self) -> Result<JobSettings> {
        for (parameter, value) in [
            ("batch_size", self.config.batch_size),
            ("num_channels", self.config.num_channels),
        ] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
            }
        }

        let pipeline = absolute(&self.config.pipeline)?;
        let image_dir = absolute(&self.config.image_dir)?;
        let output_dir = absolute(&self.config.output_dir)?;
        let log_dir = absolute(&self.config.log_dir)?;

        if !is_pipeline_file(&pipeline) {
            return Err(ToolError::InvalidPipeline {
                path: pipeline,
                expected: PIPELINE_EXTENSION,
            });
        }

        if !image_dir.is_dir() {
            return Err(ToolError::ImageDirNotFound { path: image_dir });
        }

        std::fs::create_dir_all(&output_dir).fs_context(&output_dir, "create output directory")?;
        std::fs::create_dir_all(&log_dir).fs_context(&log_dir, "create log directory")?;

        Ok(JobSettings {
            pipeline,
            image_dir,
            output_dir,
            log_dir,
            memory: self.config.memory.clone(),
        })
    }

    /// Compute the batches for the validated image directory
    ///
    /// # Errors
    ///
    /// Returns an error if the image directory cannot be listed or the batch
    /// parameters are zero
    pub fn plan(&self, settings: &JobSettings) -> Result<(usize, Vec<BatchDescriptor>)> {
        let file_count = count_entries(&settings.image_dir)?;
        let total = count_logical_images(
            file_count,
            self.config.num_channels,
            self.config.count_rule,
        )?;
        let batches = partition(total, self.config.batch_size)?;
        Ok((total, batches))
    }

    /// Run pre-flight checks, then submit every batch through `runner`
    ///
    /// Submission stops at the first failure; jobs already accepted by the
    /// scheduler are left in place.
    ///
    /// # Errors
    ///
    /// Returns the first pre-flight, planning, directory creation or
    /// submission error encountered
    pub fn run<R: JobRunner>(&self, runner: &mut R) -> Result<SubmissionReport> {
        let settings = self.preflight()?;
        let (total_images, batches) = self.plan(&settings)?;

        tracing::info!("Total images found: {total_images}");
        self.progress.start("Submitting batches", batches.len());

        let mut submitted = Vec::with_capacity(batches.len());
        for batch in batches {
            let batch_dir = settings.batch_output_dir(&batch);
            std::fs::create_dir_all(&batch_dir).fs_context(&batch_dir, "create batch directory")?;

            let submission = JobSubmission::for_batch(&batch, &settings);
            tracing::debug!("{submission}");
            runner.submit(&submission)?;
            tracing::debug!("Batch {} submitted.", batch.name);

            self.progress.advance();
            submitted.push(batch);
        }

        self.progress.finish();
        tracing::info!("Batch jobs submitted to Slurm for image processing.");

        Ok(SubmissionReport {
            total_images,
            submitted,
        })
    }
}

/// True when `path` is an existing file with the pipeline extension
pub fn is_pipeline_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(PIPELINE_EXTENSION))
}

/// Number of entries, of any kind, directly inside `directory`
///
/// # Errors
///
/// Returns a file system error if the directory cannot be listed
pub fn count_entries(directory: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in std::fs::read_dir(directory).fs_context(directory, "list image directory")? {
        entry.fs_context(directory, "read directory entry")?;
        count += 1;
    }
    Ok(count)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).fs_context(path, "resolve absolute path")
}
