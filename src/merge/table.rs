//! In-memory CSV tables with header-aware reading, appending and writing

use crate::io::error::{Result, ToolError};
use csv::{ReaderBuilder, StringRecord, Writer};
use std::path::Path;

/// Header plus ordered data rows of one CSV table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    /// Build a table from a header and rows
    pub const fn new(header: StringRecord, rows: Vec<StringRecord>) -> Self {
        Self { header, rows }
    }

    /// Read a CSV file whose first record is the header
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::TableRead`] if the file cannot be opened or any
    /// record fails to parse, including records whose field count differs
    /// from the header, and [`ToolError::EmptyTable`] if there is no header
    pub fn from_path(path: &Path) -> Result<Self> {
        let read_error = |source| ToolError::TableRead {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(read_error)?;

        let header = reader.headers().map_err(read_error)?.clone();
        if header.is_empty() {
            return Err(ToolError::EmptyTable {
                path: path.to_path_buf(),
            });
        }

        let rows = reader
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(read_error)?;

        Ok(Self { header, rows })
    }

    /// Column names in file order
    pub fn columns(&self) -> Vec<String> {
        self.header.iter().map(str::to_string).collect()
    }

    /// Header record
    pub const fn header(&self) -> &StringRecord {
        &self.header
    }

    /// Data rows in order
    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when `other` has exactly the same columns in the same order
    pub fn same_columns(&self, other: &Self) -> bool {
        self.header == other.header
    }

    /// Move all rows of `other` after the existing rows
    ///
    /// The header of `other` is discarded; callers check compatibility first.
    pub fn append(&mut self, other: Self) {
        self.rows.extend(other.rows);
    }

    /// Write header and rows to `path`, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::TableWrite`] if the file cannot be created or
    /// written
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let write_error = |source| ToolError::TableWrite {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = Writer::from_path(path).map_err(write_error)?;
        writer.write_record(&self.header).map_err(write_error)?;
        for row in &self.rows {
            writer.write_record(row).map_err(write_error)?;
        }
        writer
            .flush()
            .map_err(|source| write_error(csv::Error::from(source)))
    }
}
