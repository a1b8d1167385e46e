//! Error types and context management for merge and submission runs

use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use thiserror::Error;

/// Main error type for all tool operations
#[derive(Debug, Error)]
pub enum ToolError {
    /// Pipeline path is missing or does not carry the pipeline extension
    #[error(
        "Invalid pipeline file '{}': expected an existing CellProfiler pipeline with .{expected} extension",
        .path.display()
    )]
    InvalidPipeline {
        /// Path supplied as the pipeline file
        path: PathBuf,
        /// Extension the pipeline file must carry
        expected: &'static str,
    },

    /// Image directory does not exist
    #[error("Image directory '{}' not found", .path.display())]
    ImageDirNotFound {
        /// Path supplied as the image directory
        path: PathBuf,
    },

    /// A merge source location does not exist or is not a directory
    #[error("Source directory '{}' not found", .path.display())]
    MissingSource {
        /// Path supplied as a source location
        path: PathBuf,
    },

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Table could not be read or parsed
    #[error("Failed to read table '{}': {source}", .path.display())]
    TableRead {
        /// Path to the table file
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// Table file holds no header row
    #[error("Table '{}' is empty: no header row to merge", .path.display())]
    EmptyTable {
        /// Path to the table file
        path: PathBuf,
    },

    /// Table could not be written
    #[error("Failed to write table '{}': {source}", .path.display())]
    TableWrite {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// Same-named tables disagree on their header
    #[error(
        "Table '{}' has columns [{}] but '{base_name}' was started with [{}]",
        .path.display(),
        .found.join(", "),
        .expected.join(", ")
    )]
    SchemaMismatch {
        /// Grouping key shared by the conflicting tables
        base_name: String,
        /// File whose header disagrees
        path: PathBuf,
        /// Header of the first table seen for this base name
        expected: Vec<String>,
        /// Header of the offending table
        found: Vec<String>,
    },

    /// Submission command could not be started
    #[error("Failed to launch '{program}' for job {job_name}: {source}")]
    SubmissionLaunch {
        /// Program that failed to start
        program: String,
        /// Job the command was submitting
        job_name: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Submission command ran but exited unsuccessfully
    #[error("Submission of job {job_name} failed: {status}")]
    SubmissionFailed {
        /// Job the command was submitting
        job_name: String,
        /// Exit status reported by the scheduler command
        status: ExitStatus,
    },
}

/// Convenience type alias for tool results
pub type Result<T> = std::result::Result<T, ToolError>;

/// Attaches path and operation context to raw I/O results
pub trait FsContext<T> {
    /// Convert an I/O failure into [`ToolError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn fs_context(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> FsContext<T> for std::io::Result<T> {
    fn fs_context(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| ToolError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ToolError {
    ToolError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
