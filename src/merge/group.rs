//! Accumulation of same-named tables keyed by base name

use crate::io::error::{Result, ToolError};
use crate::io::progress::ProgressTracker;
use crate::merge::table::Table;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Tables grouped by base name, kept in first-encounter order
#[derive(Debug, Default)]
pub struct TableGroups {
    order: Vec<String>,
    tables: HashMap<String, Table>,
}

impl TableGroups {
    /// Create an empty grouping
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `table`, read from `path`, to the group for `base_name`
    ///
    /// The first table seen for a base name starts the group; later tables
    /// append their rows after the rows already held.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::SchemaMismatch`] if the columns of `table` differ
    /// from those of the table that started the group
    pub fn absorb(&mut self, base_name: &str, path: &Path, table: Table) -> Result<()> {
        let Some(existing) = self.tables.get_mut(base_name) else {
            self.order.push(base_name.to_string());
            self.tables.insert(base_name.to_string(), table);
            return Ok(());
        };

        if !existing.same_columns(&table) {
            return Err(ToolError::SchemaMismatch {
                base_name: base_name.to_string(),
                path: path.to_path_buf(),
                expected: existing.columns(),
                found: table.columns(),
            });
        }

        existing.append(table);
        Ok(())
    }

    /// Number of distinct base names
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when nothing has been absorbed
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Accumulated table for `base_name`
    pub fn get(&self, base_name: &str) -> Option<&Table> {
        self.tables.get(base_name)
    }

    /// Base names in first-encounter order
    pub fn base_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Write every group to `<output_dir>/<base name>.<extension>`
    ///
    /// Existing files of the same name are overwritten. Returns the written
    /// paths in first-encounter order.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::TableWrite`] if any output file cannot be written
    pub fn write_all(
        &self,
        output_dir: &Path,
        extension: &str,
        progress: &ProgressTracker,
    ) -> Result<Vec<PathBuf>> {
        progress.start("Writing tables", self.order.len());

        let mut written = Vec::with_capacity(self.order.len());
        for (base_name, table) in self
            .order
            .iter()
            .filter_map(|name| self.tables.get(name).map(|table| (name, table)))
        {
            let output_path = output_dir.join(format!("{base_name}.{extension}"));
            table.write_to_path(&output_path)?;
            tracing::debug!(
                "Wrote {} ({} rows)",
                output_path.display(),
                table.row_count()
            );
            progress.advance();
            written.push(output_path);
        }

        Ok(written)
    }
}
