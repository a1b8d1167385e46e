//! Logical image counting and batch partitioning

use crate::io::configuration::{BATCH_NAME_PREFIX, BATCH_NAME_WIDTH};
use crate::io::error::{Result, invalid_parameter};
use clap::ValueEnum;

/// How the logical image count is derived from a file count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ImageCountRule {
    /// `floor(files / channels) + 1`; overcounts by one when the division is exact
    #[default]
    Inclusive,
    /// `floor(files / channels)`
    Exact,
}

/// Number of logical images represented by `file_count` files on disk
///
/// # Errors
///
/// Returns an invalid parameter error if `num_channels` is zero
pub fn count_logical_images(
    file_count: usize,
    num_channels: usize,
    rule: ImageCountRule,
) -> Result<usize> {
    if num_channels == 0 {
        return Err(invalid_parameter(
            "num_channels",
            &num_channels,
            &"must be at least 1",
        ));
    }

    let complete = file_count / num_channels;
    Ok(match rule {
        ImageCountRule::Inclusive => complete + 1,
        ImageCountRule::Exact => complete,
    })
}

/// One contiguous range of logical image indices submitted as a single job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchDescriptor {
    /// 1-based sequence number
    pub number: usize,
    /// Job and output directory name, e.g. `batch_001`
    pub name: String,
    /// First image index (inclusive)
    pub start: usize,
    /// One past the last image index
    pub end: usize,
}

impl BatchDescriptor {
    /// Index of the last image in the batch
    pub const fn last(&self) -> usize {
        self.end.saturating_sub(1)
    }

    /// Number of images in the batch
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a batch covering no images
    pub const fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Name of the batch with 1-based sequence `number`
pub fn batch_name(number: usize) -> String {
    format!("{BATCH_NAME_PREFIX}{number:0width$}", width = BATCH_NAME_WIDTH)
}

/// Split `[0, total)` into consecutive batches of at most `batch_size` images
///
/// # Errors
///
/// Returns an invalid parameter error if `batch_size` is zero
pub fn partition(total: usize, batch_size: usize) -> Result<Vec<BatchDescriptor>> {
    if batch_size == 0 {
        return Err(invalid_parameter(
            "batch_size",
            &batch_size,
            &"must be at least 1",
        ));
    }

    Ok((0..total)
        .step_by(batch_size)
        .enumerate()
        .map(|(index, start)| BatchDescriptor {
            number: index + 1,
            name: batch_name(index + 1),
            start,
            end: (start + batch_size).min(total),
        })
        .collect())
}
