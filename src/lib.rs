//! # pradix
//!
//! `pradix` is a parallel most-significant-digit radix sort for slices of
//! fixed-size records, keyed by a caller-supplied integer hash with a known
//! upper bound.
//!
//! Records are bucketed on successive 8-bit windows of their key, from the
//! highest significant bit down. Partitions shorter than a cutoff (2000 by
//! default), or whose key bits are exhausted, are finished with a stable
//! comparison sort, so the comparator only ever decides ties the key cannot.
//!
//! ## Key Features
//!
//! - **In-Place**: [`sort_in_place`] permutes elements into their buckets by
//!   cycle following, using only fixed-size count tables as extra space.
//! - **Out-of-Place**: [`sort_copy`] counts and scatters the input in parallel
//!   into a separate destination, with every write position precomputed so
//!   the scatter needs no synchronization.
//! - **Worker Fan-Out**: after the top-level pass each bucket is an
//!   independent subproblem, distributed across scoped worker threads.
//! - **Deterministic**: the output never depends on the thread count.
//!
//! ## Usage
//!
//! ```rust
//! use pradix::{ByKey, sort_in_place};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Read {
//!     position: u32,
//!     name: &'static str,
//! }
//!
//! let mut reads = vec![
//!     Read { position: 40, name: "r2" },
//!     Read { position: 7, name: "r1" },
//!     Read { position: 40, name: "r0" },
//! ];
//!
//! let hash = |r: &Read| r.position;
//! // Ties on position are broken by name.
//! let cmp = |a: &Read, b: &Read| a.position.cmp(&b.position).then(a.name.cmp(&b.name));
//! sort_in_place(&mut reads, hash, cmp, 40, 2).unwrap();
//!
//! let names: Vec<_> = reads.iter().map(|r| r.name).collect();
//! assert_eq!(names, vec!["r1", "r0", "r2"]);
//! ```
//!
//! When the records' order is fully determined by the key, [`ByKey`] builds the
//! comparator, and [`radix_sort_by_key`] also derives the key bound:
//!
//! ```rust
//! use pradix::radix_sort_by_key;
//!
//! let mut data = vec![900u64, 3, 77, 3, 12];
//! radix_sort_by_key(&mut data, |v| *v, 1).unwrap();
//! assert_eq!(data, vec![3, 3, 12, 77, 900]);
//! ```
//!
//! ## Contract
//!
//! - `hash(record) <= max_key` for every record; violations are reported as
//!   [`SortError::KeyOutOfRange`] before anything is moved.
//! - `hash` must agree with the comparator: a smaller key orders first.
//!
//! Tunables (thread count, cutoff, window width) live in [`SortConfig`] and are
//! accepted by the `*_with` variants of each entry point.

pub mod algo;
pub mod config;
pub mod core;
pub mod error;

pub use crate::algo::{
    OffsetTable, merge_offsets, radix_sort_by_key, radix_sort_copy_by_key, sort_copy,
    sort_copy_with, sort_in_place, sort_in_place_with,
};
pub use crate::config::SortConfig;
pub use crate::core::{BUCKET_COUNT, ByKey, Comparator, DEFAULT_CUTOFF, KeyExtractor, RADIX_BITS, RadixKey};
pub use crate::error::{Result, SortError};

pub mod prelude {
    pub use crate::algo::{
        radix_sort_by_key, radix_sort_copy_by_key, sort_copy, sort_copy_with, sort_in_place,
        sort_in_place_with,
    };
    pub use crate::config::SortConfig;
    pub use crate::core::{ByKey, Comparator, KeyExtractor, RadixKey};
    pub use crate::error::SortError;
}
