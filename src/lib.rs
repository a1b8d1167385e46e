//! Batch submission and result merging for CellProfiler image analysis on Slurm
//!
//! The submitter splits an image directory into fixed-size batches and submits one
//! headless CellProfiler job per batch. The merger later combines the per-batch
//! result tables into one table per measurement file.

#![forbid(unsafe_code)]

/// Command-line parsing, configuration, errors, logging and progress
pub mod io;
/// Grouping and concatenation of same-named result tables
pub mod merge;
/// Batch partitioning and scheduler job submission
pub mod submit;

pub use io::error::{Result, ToolError};
