//! Out-of-place driver.
//!
//! The input is split into one contiguous range per worker. Workers count
//! top-level buckets over their own range, the counts are merged into an
//! [`OffsetTable`], and then every worker scatters its range into the
//! destination windows reserved for it. Within a bucket the windows are laid
//! out in worker order, so the scatter is stable and the result does not
//! depend on the worker count.

use super::fan_out::{for_each_group, map_workers};
use super::kernel::radix_sort_bucket;
use super::{RadixCounts, TopLevel, count_keys, split_buckets};
use crate::config::SortConfig;
use crate::core::{BUCKET_COUNT, Comparator, KeyExtractor};
use crate::error::{Result, SortError};
use log::debug;
use std::mem;
use std::time::Instant;

impl AsRef<[usize]> for RadixCounts {
    fn as_ref(&self) -> &[usize] {
        &self.data
    }
}

/// Destination write positions for every (worker, bucket) pair.
///
/// Buckets are laid out in ascending order; inside a bucket each worker owns a
/// contiguous window, in ascending worker order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OffsetTable {
    starts: Vec<Vec<usize>>,
    bounds: Vec<usize>,
}

impl OffsetTable {
    /// First destination slot written by `worker` for `bucket`.
    pub fn start(&self, worker: usize, bucket: usize) -> usize {
        self.starts[worker][bucket]
    }

    /// Global bucket boundaries; bucket `b` spans `bounds[b]..bounds[b + 1]`.
    pub fn bucket_bounds(&self) -> &[usize] {
        &self.bounds
    }

    pub fn workers(&self) -> usize {
        self.starts.len()
    }

    pub fn buckets(&self) -> usize {
        self.bounds.len() - 1
    }

    /// Total number of records covered.
    pub fn len(&self) -> usize {
        self.bounds.last().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Two-dimensional exclusive prefix sum over per-worker bucket counts.
///
/// A single running total walks bucket 0 across all workers, then bucket 1,
/// and so on. `counts[w][b]` is how many records of worker `w` fall into
/// bucket `b`; only the first `buckets` entries of each row are read.
///
/// ```
/// use pradix::merge_offsets;
///
/// let counts = [vec![2usize, 1], vec![1, 3]];
/// let table = merge_offsets(&counts, 2);
/// assert_eq!(table.bucket_bounds(), &[0, 3, 7]);
/// assert_eq!((table.start(0, 0), table.start(1, 0)), (0, 2));
/// assert_eq!((table.start(0, 1), table.start(1, 1)), (3, 4));
/// ```
pub fn merge_offsets<C: AsRef<[usize]>>(counts: &[C], buckets: usize) -> OffsetTable {
    let mut starts = vec![vec![0; buckets]; counts.len()];
    let mut bounds = Vec::with_capacity(buckets + 1);
    let mut total = 0;
    for bucket in 0..buckets {
        bounds.push(total);
        for (worker, row) in counts.iter().enumerate() {
            starts[worker][bucket] = total;
            total += row.as_ref()[bucket];
        }
    }
    bounds.push(total);
    OffsetTable { starts, bounds }
}

/// Cuts `dst` into one window per (worker, bucket), grouped by worker.
fn carve_windows<'a, T, C: AsRef<[usize]>>(
    mut dst: &'a mut [T],
    counts: &[C],
    table: &OffsetTable,
) -> Vec<Vec<&'a mut [T]>> {
    let mut windows: Vec<Vec<&mut [T]>> = (0..table.workers())
        .map(|_| Vec::with_capacity(table.buckets()))
        .collect();
    let mut pos = 0;
    for bucket in 0..table.buckets() {
        for (worker, row) in counts.iter().enumerate() {
            debug_assert_eq!(pos, table.start(worker, bucket));
            let len = row.as_ref()[bucket];
            let (head, tail) = mem::take(&mut dst).split_at_mut(len);
            windows[worker].push(head);
            dst = tail;
            pos += len;
        }
    }
    windows
}

/// Copies every record of `src` into the window of its bucket, in input order.
fn scatter<T, H>(src: &[T], windows: &mut [&mut [T]], hash: &H, top: &TopLevel)
where
    T: Clone,
    H: KeyExtractor<T>,
{
    let mut cursor = [0usize; BUCKET_COUNT];
    for item in src {
        let bucket = top.digit(hash.key(item));
        windows[bucket][cursor[bucket]] = item.clone();
        cursor[bucket] += 1;
    }
}

/// Splits `src` into `workers` ranges tagged with their offset; the last absorbs the remainder.
fn split_input<T>(src: &[T], workers: usize) -> Vec<(usize, &[T])> {
    let step = src.len() / workers;
    (0..workers)
        .map(|w| {
            let start = w * step;
            let end = if w + 1 == workers { src.len() } else { start + step };
            (start, &src[start..end])
        })
        .collect()
}

/// Sorts `src` into `dst[..src.len()]` using `threads` workers in every phase.
///
/// `src` is only read. Records enter their top-level bucket in input order,
/// and buckets shorter than the cutoff go straight to the stable fallback sort,
/// so ties keep their input order there. Larger buckets are permuted in place
/// and do not keep it.
///
/// # Errors
///
/// - [`SortError::DestinationTooSmall`] if `dst` is shorter than `src`.
/// - [`SortError::KeyOutOfRange`] if a key exceeds `max_key`; `dst` is untouched.
/// - [`SortError::InvalidConfig`] if `threads` is 0.
/// - [`SortError::Spawn`] if a worker cannot be started.
///
/// # Examples
///
/// ```
/// use pradix::{ByKey, sort_copy};
///
/// let src = vec![(5u8, 'e'), (1, 'a'), (5, 'd'), (1, 'b'), (3, 'c')];
/// let mut dst = vec![(0, ' '); src.len()];
/// let hash = |p: &(u8, char)| p.0;
/// sort_copy(&src, &mut dst, hash, ByKey(hash), 5, 2).unwrap();
///
/// assert_eq!(dst, vec![(1, 'a'), (1, 'b'), (3, 'c'), (5, 'e'), (5, 'd')]);
/// ```
pub fn sort_copy<T, H, C>(
    src: &[T],
    dst: &mut [T],
    hash: H,
    cmp: C,
    max_key: H::Key,
    threads: usize,
) -> Result<()>
where
    T: Clone + Send + Sync,
    H: KeyExtractor<T> + Sync,
    C: Comparator<T> + Sync,
{
    let config = SortConfig::default().with_threads(threads);
    sort_copy_with(src, dst, hash, cmp, max_key, &config)
}

/// [`sort_copy`] with explicit tunables.
pub fn sort_copy_with<T, H, C>(
    src: &[T],
    dst: &mut [T],
    hash: H,
    cmp: C,
    max_key: H::Key,
    config: &SortConfig,
) -> Result<()>
where
    T: Clone + Send + Sync,
    H: KeyExtractor<T> + Sync,
    C: Comparator<T> + Sync,
{
    config.validate()?;
    if dst.len() < src.len() {
        return Err(SortError::DestinationTooSmall {
            required: src.len(),
            actual: dst.len(),
        });
    }
    let len = src.len();
    let dst = &mut dst[..len];
    if len <= 1 {
        dst.clone_from_slice(src);
        return Ok(());
    }

    let top = TopLevel::new(max_key, config);
    let workers = config.threads.min(len);
    let chunks = split_input(src, workers);
    let timed = config.threads > 1;

    // 1. Per-worker counts.
    let started = Instant::now();
    let counts = map_workers(chunks.clone(), |(base, chunk)| {
        let mut counts = RadixCounts::new();
        count_keys(chunk, &hash, max_key, &top, &mut counts.data, base).map(|()| counts)
    })?
    .into_iter()
    .collect::<Result<Vec<_>>>()?;
    if timed {
        debug!("counted {len} records into {} buckets in {:?}", top.occupied, started.elapsed());
    }

    // 2. Merge into write offsets and scatter.
    let started = Instant::now();
    let table = merge_offsets(&counts, top.occupied);
    debug_assert_eq!(table.len(), len);
    {
        let windows = carve_windows(&mut *dst, &counts, &table);
        let jobs: Vec<_> = chunks.into_iter().zip(windows).collect();
        map_workers(jobs, |((_, chunk), mut windows)| {
            scatter(chunk, &mut windows, &hash, &top)
        })?;
    }
    if timed {
        debug!("scattered {len} records across {workers} workers in {:?}", started.elapsed());
    }

    // 3. Finish every bucket independently.
    let started = Instant::now();
    let buckets = split_buckets(dst, table.bucket_bounds());
    for_each_group(buckets, config.threads, |bucket| {
        radix_sort_bucket(bucket, &hash, &cmp, top.right_shift, config)
    })?;
    if timed {
        debug!("recursive bucket sorts finished in {:?}", started.elapsed());
    }
    Ok(())
}
