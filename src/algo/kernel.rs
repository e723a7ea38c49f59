//! Single-threaded recursive bucket kernel.
//!
//! Sorts a contiguous range by partitioning on a fixed-width window of key bits,
//! permuting elements into place by cycle following, and recursing into every
//! bucket with the next lower window. Small ranges, and ranges whose key bits
//! are exhausted, go to the comparator instead.

use super::RadixCounts;
use crate::config::SortConfig;
use crate::core::{BUCKET_COUNT, Comparator, KeyExtractor, RadixKey};

/// Exclusive prefix sum of the first `buckets` counts.
///
/// Bucket `b` spans `bounds[b]..bounds[b + 1]`. Entries past `buckets` are unused.
#[inline]
pub(crate) fn bucket_bounds(counts: &[usize], buckets: usize) -> [usize; BUCKET_COUNT + 1] {
    let mut bounds = [0usize; BUCKET_COUNT + 1];
    let mut sum = 0;
    bounds[1..=buckets]
        .iter_mut()
        .zip(&counts[..buckets])
        .for_each(|(bound, &count)| {
            sum += count;
            *bound = sum;
        });
    bounds
}

/// Moves every element into its bucket in place.
///
/// `bounds` must hold exactly one more entry than there are buckets and must
/// be the exclusive prefix sum of the true bucket counts of `data`. Each
/// element is swapped at most once into its final slot for this level.
pub(crate) fn permute_into_buckets<T, D>(data: &mut [T], bounds: &[usize], digit: D)
where
    D: Fn(&T) -> usize,
{
    let buckets = bounds.len() - 1;
    let mut place = [0usize; BUCKET_COUNT];
    place[..buckets].copy_from_slice(&bounds[..buckets]);

    for bin in 0..buckets {
        let end = bounds[bin + 1];
        while place[bin] != end {
            let cur = place[bin];
            let mut target = digit(&data[cur]);
            // Follow the cycle until the held element belongs here.
            while target != bin {
                let slot = place[target];
                data.swap(cur, slot);
                place[target] += 1;
                target = digit(&data[cur]);
            }
            place[bin] += 1;
        }
    }
}

/// Recursively sorts `data`, whose keys may still differ in their lowest `log_size` bits.
pub(crate) fn radix_sort_bucket<T, H, C>(
    data: &mut [T],
    hash: &H,
    cmp: &C,
    log_size: u32,
    config: &SortConfig,
) where
    H: KeyExtractor<T>,
    C: Comparator<T>,
{
    if data.len() < config.cutoff || log_size == 0 {
        if data.len() > 1 {
            data.sort_by(|a, b| cmp.compare(a, b));
        }
        return;
    }

    let right_shift = log_size.saturating_sub(config.radix_bits);
    let mask = config.bucket_mask();
    let buckets = mask + 1;
    let digit = |item: &T| hash.key(item).digit(right_shift, mask);

    let mut counts = RadixCounts::new();
    let counts = &mut counts.data;
    data.iter().for_each(|item| counts[digit(item)] += 1);

    // Whole range shares this window: nothing to move, go straight to the next one.
    if counts[..buckets].iter().any(|&count| count == data.len()) {
        radix_sort_bucket(data, hash, cmp, right_shift, config);
        return;
    }

    let bounds = bucket_bounds(counts, buckets);
    permute_into_buckets(data, &bounds[..=buckets], &digit);

    bounds[..=buckets].windows(2).for_each(|w| {
        if w[1] - w[0] > 1 {
            radix_sort_bucket(&mut data[w[0]..w[1]], hash, cmp, right_shift, config);
        }
    });
}
