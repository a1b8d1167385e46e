//! Discovery of table files in source directories

use crate::io::error::{FsContext, Result, ToolError};
use std::path::{Path, PathBuf};

/// A table file found during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Full path of the file
    pub path: PathBuf,
    /// File name without its extension, the grouping key
    pub base_name: String,
}

/// Qualifying files of one directory, in visit order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryScan {
    /// Directory that was scanned
    pub directory: PathBuf,
    /// Table files found, sorted by file name
    pub files: Vec<SourceFile>,
}

impl DirectoryScan {
    /// True when no qualifying file was found
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Case-insensitive check that `file_name` ends in `.<extension>`
pub fn has_table_extension(file_name: &str, extension: &str) -> bool {
    let suffix = format!(".{}", extension.to_lowercase());
    file_name.to_lowercase().ends_with(&suffix)
}

/// Grouping key of a file: its name without the last extension
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

/// List qualifying table files in `directory`
///
/// Only regular files are considered. A file whose name matches `exclude`
/// (case-insensitive) is skipped even when it carries the table extension.
///
/// # Errors
///
/// Returns [`ToolError::MissingSource`] if `directory` is not a directory and
/// [`ToolError::FileSystem`] if its entries cannot be listed
pub fn scan_directory(
    directory: &Path,
    extension: &str,
    exclude: Option<&str>,
) -> Result<DirectoryScan> {
    if !directory.is_dir() {
        return Err(ToolError::MissingSource {
            path: directory.to_path_buf(),
        });
    }

    let excluded = exclude.map(str::to_lowercase);
    let mut files = Vec::new();

    for entry in std::fs::read_dir(directory).fs_context(directory, "list directory")? {
        let path = entry.fs_context(directory, "read directory entry")?.path();
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        if !has_table_extension(&name, extension) || !path.is_file() {
            continue;
        }
        if excluded.as_deref() == Some(name.to_lowercase().as_str()) {
            continue;
        }

        files.push(SourceFile {
            base_name: base_name(&path),
            path,
        });
    }

    files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

    Ok(DirectoryScan {
        directory: directory.to_path_buf(),
        files,
    })
}

/// Immediate subdirectories of `parent`, sorted by name
///
/// # Errors
///
/// Returns [`ToolError::MissingSource`] if `parent` is not a directory and
/// [`ToolError::FileSystem`] if its entries cannot be listed
pub fn batch_directories(parent: &Path) -> Result<Vec<PathBuf>> {
    if !parent.is_dir() {
        return Err(ToolError::MissingSource {
            path: parent.to_path_buf(),
        });
    }

    let mut directories = Vec::new();
    for entry in std::fs::read_dir(parent).fs_context(parent, "list directory")? {
        let path = entry.fs_context(parent, "read directory entry")?.path();
        if path.is_dir() {
            directories.push(path);
        }
    }
    directories.sort();

    Ok(directories)
}
