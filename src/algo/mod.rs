//! The sorting engine: a recursive MSD bucket kernel plus in-place and copy drivers.
//!
//! Both drivers run the same top-level pass. The key range `0..=max_key`
//! determines the highest significant bit; the first window covers the
//! `radix_bits` bits below it, so the number of occupied top-level buckets is
//! `(max_key >> right_shift) + 1`. After the top-level pass every bucket is
//! handed to [`kernel`] on its own, optionally across a worker pool.
//!
//! The main entry points are [`sort_in_place`] and [`sort_copy`].

mod copy;
mod fan_out;
mod in_place;
mod kernel;

pub use copy::{OffsetTable, merge_offsets, sort_copy, sort_copy_with};
pub use in_place::{sort_in_place, sort_in_place_with};

use crate::config::SortConfig;
use crate::core::{BUCKET_COUNT, ByKey, KeyExtractor, RadixKey};
use crate::error::{Result, SortError};
use cuneiform::cuneiform;
use std::mem;

// Cache-aligned counts struct.
#[cuneiform]
pub(crate) struct RadixCounts {
    pub data: [usize; BUCKET_COUNT],
}

impl RadixCounts {
    #[inline]
    pub(crate) fn new() -> Self {
        RadixCounts {
            data: [0; BUCKET_COUNT],
        }
    }
}

/// Shape of the first bucketing pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TopLevel {
    /// Lowest key bit covered by the first window; also the `log_size` handed to the kernel.
    pub right_shift: u32,
    /// Buckets needed to cover `0..=max_key`.
    pub occupied: usize,
}

impl TopLevel {
    pub(crate) fn new<K: RadixKey>(max_key: K, config: &SortConfig) -> Self {
        let log_size = max_key.bit_len();
        let right_shift = log_size.saturating_sub(config.radix_bits);
        TopLevel {
            right_shift,
            occupied: max_key.digit(right_shift, usize::MAX) + 1,
        }
    }

    #[inline(always)]
    pub(crate) fn digit<K: RadixKey>(&self, key: K) -> usize {
        key.digit(self.right_shift, usize::MAX)
    }
}

/// Tallies top-level bucket occupancy for `data`, rejecting keys above `max_key`.
///
/// `base` is the position of `data[0]` in the caller's full range, used for error reporting.
pub(crate) fn count_keys<T, H>(
    data: &[T],
    hash: &H,
    max_key: H::Key,
    top: &TopLevel,
    counts: &mut [usize],
    base: usize,
) -> Result<()>
where
    H: KeyExtractor<T>,
{
    for (i, item) in data.iter().enumerate() {
        let key = hash.key(item);
        if key > max_key {
            return Err(SortError::KeyOutOfRange {
                index: base + i,
                key: key.to_u128(),
                max: max_key.to_u128(),
            });
        }
        counts[top.digit(key)] += 1;
    }
    Ok(())
}

/// Cuts `data` into the consecutive buckets described by `bounds`.
pub(crate) fn split_buckets<'a, T>(mut data: &'a mut [T], bounds: &[usize]) -> Vec<&'a mut [T]> {
    let mut buckets = Vec::with_capacity(bounds.len().saturating_sub(1));
    for w in bounds.windows(2) {
        let (head, tail) = mem::take(&mut data).split_at_mut(w[1] - w[0]);
        buckets.push(head);
        data = tail;
    }
    buckets
}

/// Sorts `data` in place by `key`, deriving the key bound with one extra scan.
///
/// Records with equal keys may be reordered among themselves once their bucket
/// is large enough to be permuted.
///
/// # Examples
///
/// ```
/// use pradix::radix_sort_by_key;
///
/// let mut data = vec![(5u32, "e"), (1, "a"), (3, "c")];
/// radix_sort_by_key(&mut data, |p| p.0, 1).unwrap();
/// assert_eq!(data, vec![(1, "a"), (3, "c"), (5, "e")]);
/// ```
pub fn radix_sort_by_key<T, K, F>(data: &mut [T], key: F, threads: usize) -> Result<()>
where
    T: Send,
    K: RadixKey,
    F: Fn(&T) -> K + Sync,
{
    let Some(max_key) = data.iter().map(&key).max() else {
        return Ok(());
    };
    sort_in_place(data, &key, ByKey(&key), max_key, threads)
}

/// Returns a sorted copy of `src`, ordered by `key`. `src` is left untouched.
///
/// Ties keep their input order while every top-level bucket stays below the
/// default cutoff; see [`sort_copy`].
///
/// ```
/// use pradix::radix_sort_copy_by_key;
///
/// let data = vec![(5u32, "e"), (1, "a"), (5, "d"), (1, "b"), (3, "c")];
/// let sorted = radix_sort_copy_by_key(&data, |p| p.0, 2).unwrap();
/// assert_eq!(sorted, vec![(1, "a"), (1, "b"), (3, "c"), (5, "e"), (5, "d")]);
/// ```
pub fn radix_sort_copy_by_key<T, K, F>(src: &[T], key: F, threads: usize) -> Result<Vec<T>>
where
    T: Clone + Send + Sync,
    K: RadixKey,
    F: Fn(&T) -> K + Sync,
{
    let mut dst = src.to_vec();
    let Some(max_key) = src.iter().map(&key).max() else {
        return Ok(dst);
    };
    sort_copy(src, &mut dst, &key, ByKey(&key), max_key, threads)?;
    Ok(dst)
}
