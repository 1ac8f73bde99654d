// Compression-ratio accounting.
//
// Sizes use a unit-cost model: every input sample costs one unit, and every
// run costs two (one for the value, one for the count). This is not a
// bit-accurate size.

use crate::transform::Run;

/// Units charged per run: value + count.
pub const UNITS_PER_RUN: usize = 2;

/// `original / compressed`, or 0.0 when `compressed` is 0.
pub fn compression_ratio(original: usize, compressed: usize) -> f64 {
    if compressed == 0 {
        return 0.0;
    }
    original as f64 / compressed as f64
}

/// Original and compressed sizes of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMetrics {
    /// Samples before transforming (characters, bytes or log entries).
    pub original_size: usize,
    /// `runs * UNITS_PER_RUN`.
    pub compressed_size: usize,
}

impl SizeMetrics {
    pub fn new(original_size: usize, compressed_size: usize) -> Self {
        Self {
            original_size,
            compressed_size,
        }
    }

    pub fn from_runs(original_size: usize, runs: &[Run]) -> Self {
        Self::new(original_size, runs.len() * UNITS_PER_RUN)
    }

    pub fn ratio(&self) -> f64 {
        compression_ratio(self.original_size, self.compressed_size)
    }
}
