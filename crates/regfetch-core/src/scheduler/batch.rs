//! Partitioning of the work list into fixed-size batches.

use std::ops::Range;

/// Consecutive, non-overlapping index ranges covering `0..len`; every range
/// has `batch_size` items except possibly the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    len: usize,
    batch_size: usize,
}

impl BatchPlan {
    /// A `batch_size` of 0 is treated as 1.
    pub fn new(len: usize, batch_size: usize) -> Self {
        Self {
            len,
            batch_size: batch_size.max(1),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn total_batches(&self) -> usize {
        self.len.div_ceil(self.batch_size)
    }

    /// Index ranges in input order.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.len)
            .step_by(self.batch_size)
            .map(move |start| start..(start + self.batch_size).min(self.len))
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.ranges().map(|r| r.len()).collect()
    }
}
