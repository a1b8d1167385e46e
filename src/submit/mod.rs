/// Image counting and batch partitioning
pub mod batch;
/// Scheduler command construction
pub mod command;
/// Command execution seam
pub mod runner;
/// Validation and submission loop
pub mod submitter;
