/// Command-line parsing and run orchestration
pub mod cli;
/// Fixed names and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Progress display
pub mod progress;
