//! In-place driver: one counting pass, one cycle-following permutation, then
//! per-bucket recursion fanned out across workers.

use super::fan_out::for_each_group;
use super::kernel::{bucket_bounds, permute_into_buckets, radix_sort_bucket};
use super::{RadixCounts, TopLevel, count_keys, split_buckets};
use crate::config::SortConfig;
use crate::core::{Comparator, KeyExtractor};
use crate::error::Result;
use log::trace;

/// Sorts `data` in place using `threads` workers for the per-bucket phase.
///
/// `hash` must return at most `max_key` for every record, and must agree with
/// `cmp`: records with smaller keys order first. No second buffer is allocated.
///
/// # Errors
///
/// - [`SortError::KeyOutOfRange`](crate::SortError::KeyOutOfRange) if a key exceeds
///   `max_key`; `data` is untouched in that case.
/// - [`SortError::InvalidConfig`](crate::SortError::InvalidConfig) if `threads` is 0.
/// - [`SortError::Spawn`](crate::SortError::Spawn) if a worker cannot be started.
///
/// # Examples
///
/// ```
/// use pradix::sort_in_place;
///
/// let mut data = vec![(5u8, 'e'), (1, 'a'), (5, 'd'), (1, 'b'), (3, 'c')];
/// sort_in_place(&mut data, |p: &(u8, char)| p.0, |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0), 5, 1).unwrap();
///
/// assert_eq!(data, vec![(1, 'a'), (1, 'b'), (3, 'c'), (5, 'e'), (5, 'd')]);
/// ```
pub fn sort_in_place<T, H, C>(data: &mut [T], hash: H, cmp: C, max_key: H::Key, threads: usize) -> Result<()>
where
    T: Send,
    H: KeyExtractor<T> + Sync,
    C: Comparator<T> + Sync,
{
    let config = SortConfig::default().with_threads(threads);
    sort_in_place_with(data, hash, cmp, max_key, &config)
}

/// [`sort_in_place`] with explicit tunables.
pub fn sort_in_place_with<T, H, C>(
    data: &mut [T],
    hash: H,
    cmp: C,
    max_key: H::Key,
    config: &SortConfig,
) -> Result<()>
where
    T: Send,
    H: KeyExtractor<T> + Sync,
    C: Comparator<T> + Sync,
{
    config.validate()?;
    if data.len() <= 1 {
        return Ok(());
    }

    let top = TopLevel::new(max_key, config);
    let occupied = top.occupied;

    // 1. Count (and validate) every key before anything moves.
    let mut counts = RadixCounts::new();
    count_keys(data, &hash, max_key, &top, &mut counts.data, 0)?;

    // 2. Bucket boundaries and in-place permutation over the occupied buckets only.
    let bounds = bucket_bounds(&counts.data, occupied);
    let bounds = &bounds[..=occupied];
    permute_into_buckets(data, bounds, |item| top.digit(hash.key(item)));

    trace!(
        "in-place top level: {} records, {} buckets, right shift {}",
        data.len(),
        occupied,
        top.right_shift
    );

    // 3. Buckets are disjoint, so each can be finished independently.
    let buckets = split_buckets(data, bounds);
    for_each_group(buckets, config.threads, |bucket| {
        radix_sort_bucket(bucket, &hash, &cmp, top.right_shift, config)
    })
}
