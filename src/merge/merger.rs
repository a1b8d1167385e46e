//! Merge runs over flat directory lists or batch output trees

use crate::io::configuration::SENTINEL_FILENAME;
use crate::io::error::{FsContext, Result};
use crate::io::progress::ProgressTracker;
use crate::merge::group::TableGroups;
use crate::merge::scan::{DirectoryScan, batch_directories, scan_directory};
use crate::merge::table::Table;
use std::path::PathBuf;

/// Where source tables are found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLayout {
    /// Every listed directory is scanned, in the order given
    Flat(Vec<PathBuf>),
    /// Each immediate subdirectory of the parent is one batch
    Batch(PathBuf),
}

/// Everything a merge run needs
#[derive(Debug, Clone)]
pub struct MergeRequest {
    /// Source directories
    pub layout: SourceLayout,
    /// Directory receiving merged tables, created if absent
    pub output_dir: PathBuf,
    /// Table file extension without the leading dot
    pub extension: String,
}

/// Outcome of a completed merge run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Merged tables written, in first-encounter order of their base names
    pub written: Vec<PathBuf>,
    /// Source tables read
    pub files_read: usize,
    /// Batch directories that held no qualifying table
    pub empty_dirs: Vec<PathBuf>,
}

impl MergeReport {
    /// True when every batch directory contributed at least one table
    pub fn is_clean(&self) -> bool {
        self.empty_dirs.is_empty()
    }
}

/// Scans sources, groups same-named tables and writes one table per name
pub struct TableMerger {
    request: MergeRequest,
    progress: ProgressTracker,
}

impl TableMerger {
    /// Create a merger for `request` that reports through `progress`
    pub const fn new(request: MergeRequest, progress: ProgressTracker) -> Self {
        Self { request, progress }
    }

    /// Run the merge
    ///
    /// Writing only starts after every source table has been read, so a read
    /// or schema failure leaves the output directory untouched apart from its
    /// creation.
    ///
    /// # Errors
    ///
    /// Returns an error if a source directory is missing, a table fails to
    /// parse, same-named tables disagree on columns, or an output cannot be
    /// written
    pub fn run(&self) -> Result<MergeReport> {
        let output_dir = &self.request.output_dir;
        std::fs::create_dir_all(output_dir).fs_context(output_dir, "create output directory")?;

        let (scans, empty_dirs) = self.collect_scans()?;

        let mut groups = TableGroups::new();
        let mut files_read = 0;
        for scan in &scans {
            tracing::debug!("Entering {}", scan.directory.display());
            for file in &scan.files {
                let table = Table::from_path(&file.path)?;
                tracing::debug!("Read {} ({} rows)", file.path.display(), table.row_count());
                groups.absorb(&file.base_name, &file.path, table)?;
                files_read += 1;
            }
        }

        let written = groups.write_all(output_dir, &self.request.extension, &self.progress)?;
        self.progress.finish();

        tracing::info!(
            "Merged {files_read} tables into {} files in {}",
            written.len(),
            output_dir.display()
        );

        Ok(MergeReport {
            written,
            files_read,
            empty_dirs,
        })
    }

    fn collect_scans(&self) -> Result<(Vec<DirectoryScan>, Vec<PathBuf>)> {
        let extension = self.request.extension.as_str();

        match &self.request.layout {
            SourceLayout::Flat(directories) => {
                let scans = directories
                    .iter()
                    .map(|dir| scan_directory(dir, extension, None))
                    .collect::<Result<Vec<_>>>()?;
                Ok((scans, Vec::new()))
            }
            SourceLayout::Batch(parent) => {
                let mut scans = Vec::new();
                let mut empty_dirs = Vec::new();
                for dir in batch_directories(parent)? {
                    let scan = scan_directory(&dir, extension, Some(SENTINEL_FILENAME))?;
                    if scan.is_empty() {
                        tracing::debug!("No {extension} files in {}", dir.display());
                        empty_dirs.push(dir);
                    } else {
                        scans.push(scan);
                    }
                }
                Ok((scans, empty_dirs))
            }
        }
    }
}
