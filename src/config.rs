//! Tunables for the sorting engine.

use crate::core::{DEFAULT_CUTOFF, RADIX_BITS};
use crate::error::{Result, SortError};
use std::thread;

/// Knobs controlling fan-out, recursion width and the comparison-sort cutoff.
///
/// ```
/// use pradix::config::SortConfig;
///
/// let config = SortConfig::default().with_threads(4).with_cutoff(512);
/// assert!(config.validate().is_ok());
/// assert!(SortConfig::default().with_radix_bits(9).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    /// Number of worker threads used by the top-level passes. Must be at least 1.
    pub threads: usize,
    /// Partitions shorter than this are sorted with the comparator.
    pub cutoff: usize,
    /// Bits examined per recursion level, `1..=RADIX_BITS`.
    pub radix_bits: u32,
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig {
            threads: 1,
            cutoff: DEFAULT_CUTOFF,
            radix_bits: RADIX_BITS,
        }
    }
}

impl SortConfig {
    /// Default configuration with one thread per available core.
    pub fn parallel() -> Self {
        let threads = thread::available_parallelism().map_or(1, |n| n.get());
        SortConfig::default().with_threads(threads)
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn with_radix_bits(mut self, radix_bits: u32) -> Self {
        self.radix_bits = radix_bits;
        self
    }

    /// Checks every field is in range.
    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(SortError::InvalidConfig("threads must be at least 1"));
        }
        if self.radix_bits == 0 || self.radix_bits > RADIX_BITS {
            return Err(SortError::InvalidConfig("radix_bits must be within 1..=8"));
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn bucket_mask(&self) -> usize {
        (1 << self.radix_bits) - 1
    }
}
