/// Accumulation of same-named tables
pub mod group;
/// Merge run orchestration and reporting
pub mod merger;
/// Source directory scanning
pub mod scan;
/// CSV table reading and writing
pub mod table;
