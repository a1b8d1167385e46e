//! Fixed names and runtime configuration defaults

// Table merging
/// Extension of result tables when none is given
pub const DEFAULT_TABLE_EXTENSION: &str = "csv";
// CellProfiler writes this per run; it describes the run, not the objects measured
/// File name never merged in batch mode
pub const SENTINEL_FILENAME: &str = "Experiment.csv";

// Batch submission
/// Extension a CellProfiler pipeline file must carry
pub const PIPELINE_EXTENSION: &str = "cppipe";
/// Logical images per submitted job
pub const DEFAULT_BATCH_SIZE: usize = 32;
/// Files on disk per logical image
pub const DEFAULT_NUM_CHANNELS: usize = 4;
/// Memory reservation per job
pub const DEFAULT_MEMORY: &str = "16G";
/// Directory receiving scheduler job logs
pub const DEFAULT_LOG_DIR: &str = "slurm_logs";
/// Wall-clock limit for every job
pub const JOB_TIME_LIMIT: &str = "24:00:00";
/// Scheduler submission command
pub const SCHEDULER_PROGRAM: &str = "sbatch";
/// Analysis tool wrapped by each job
pub const ANALYSIS_PROGRAM: &str = "cellprofiler";

// Batch naming
/// Prefix of every batch name
pub const BATCH_NAME_PREFIX: &str = "batch_";
/// Zero-padded width of the batch number
pub const BATCH_NAME_WIDTH: usize = 3;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
