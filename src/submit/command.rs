//! Construction of scheduler submission commands

use crate::io::configuration::{ANALYSIS_PROGRAM, JOB_TIME_LIMIT, SCHEDULER_PROGRAM};
use crate::submit::batch::BatchDescriptor;
use std::fmt;
use std::path::{Path, PathBuf};

/// Settings shared by every job of one submission run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSettings {
    /// CellProfiler pipeline file
    pub pipeline: PathBuf,
    /// Directory holding the input images
    pub image_dir: PathBuf,
    /// Parent of the per-batch output directories
    pub output_dir: PathBuf,
    /// Directory receiving scheduler logs
    pub log_dir: PathBuf,
    /// Memory reservation, in scheduler syntax
    pub memory: String,
}

impl JobSettings {
    /// Output directory of one batch
    pub fn batch_output_dir(&self, batch: &BatchDescriptor) -> PathBuf {
        self.output_dir.join(&batch.name)
    }
}

/// A fully built scheduler command for one batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSubmission {
    /// Job name, equal to the batch name
    pub job_name: String,
    /// Program to execute
    pub program: String,
    /// Arguments in order; the wrapped analysis command is a single argument
    pub args: Vec<String>,
}

impl JobSubmission {
    /// Build the `sbatch` command that analyses `batch`
    pub fn for_batch(batch: &BatchDescriptor, settings: &JobSettings) -> Self {
        let log_file = settings.log_dir.join(format!("{}.log", batch.name));
        let wrapped = analysis_command(
            &settings.pipeline,
            batch,
            &settings.batch_output_dir(batch),
            &settings.image_dir,
        );

        Self {
            job_name: batch.name.clone(),
            program: SCHEDULER_PROGRAM.to_string(),
            args: vec![
                format!("--job-name={}", batch.name),
                format!("--output={}", log_file.display()),
                format!("--time={JOB_TIME_LIMIT}"),
                format!("--mem={}", settings.memory),
                "--wrap".to_string(),
                wrapped,
            ],
        }
    }
}

impl fmt::Display for JobSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Shell command line running CellProfiler headless over one batch
pub fn analysis_command(
    pipeline: &Path,
    batch: &BatchDescriptor,
    batch_output_dir: &Path,
    image_dir: &Path,
) -> String {
    format!(
        "{ANALYSIS_PROGRAM} -c -r -p \"{}\" -f \"{}\" -l \"{}\" -o \"{}\" -i \"{}\"",
        pipeline.display(),
        batch.start,
        batch.last(),
        batch_output_dir.display(),
        image_dir.display()
    )
}
