//! Execution of submission commands

use crate::io::error::{Result, ToolError};
use crate::submit::command::JobSubmission;
use std::process::Command;

/// Executes one submission command to completion
///
/// Implementations must return an error for any submission the scheduler did
/// not accept; the submitter stops at the first error.
pub trait JobRunner {
    /// Run `submission` and wait for the command to exit
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be started or exits unsuccessfully
    fn submit(&mut self, submission: &JobSubmission) -> Result<()>;
}

/// Runs submissions as child processes of the current process
#[derive(Debug, Default, Clone, Copy)]
pub struct SlurmRunner;

impl JobRunner for SlurmRunner {
    fn submit(&mut self, submission: &JobSubmission) -> Result<()> {
        let status = Command::new(&submission.program)
            .args(&submission.args)
            .status()
            .map_err(|source| ToolError::SubmissionLaunch {
                program: submission.program.clone(),
                job_name: submission.job_name.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ToolError::SubmissionFailed {
                job_name: submission.job_name.clone(),
                status,
            })
        }
    }
}
