//! Core traits and constants for pradix.
//!
//! This module defines:
//! - [`RadixKey`]: unsigned integer keys the engine can bucket on.
//! - [`KeyExtractor`]: maps a record to its key.
//! - [`Comparator`]: the ordering used by the fallback comparison sort.
//! - [`ByKey`]: a comparator that orders records by their key alone.

use std::cmp::Ordering;
use std::fmt::Debug;

/// Width of the bit window examined per recursion level.
///
/// Larger windows mean fewer levels but bigger count tables; every table in
/// the engine is sized by [`BUCKET_COUNT`].
pub const RADIX_BITS: u32 = 8;

/// Number of buckets per level (`1 << RADIX_BITS`).
pub const BUCKET_COUNT: usize = 1 << RADIX_BITS;

/// Partitions shorter than this are handed to the comparison sort.
pub const DEFAULT_CUTOFF: usize = 2000;

/// An unsigned integer that can be bucketed bit-window by bit-window.
pub trait RadixKey: Copy + Ord + Debug + Send + Sync + 'static {
    /// Total number of bits in the type.
    const BITS: u32;

    /// Number of significant bits, i.e. the position of the highest set bit plus one.
    ///
    /// Returns 0 for zero.
    fn bit_len(self) -> u32;

    /// Bucket index of the window starting at bit `shift`, masked by `mask`.
    fn digit(self, shift: u32, mask: usize) -> usize;

    /// Widens the key for diagnostics.
    fn to_u128(self) -> u128;
}

macro_rules! impl_radix_key {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline(always)]
                fn bit_len(self) -> u32 {
                    <$t>::BITS - self.leading_zeros()
                }

                #[inline(always)]
                fn digit(self, shift: u32, mask: usize) -> usize {
                    (self >> shift) as usize & mask
                }

                #[inline(always)]
                fn to_u128(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

impl_radix_key!(u8, u16, u32, u64, u128, usize);

/// Maps a record to the integer key it is bucketed by.
///
/// The key must be consistent with the [`Comparator`] used alongside it:
/// if `key(a) < key(b)` then `a` must order before `b`.
///
/// Any `Fn(&T) -> K` closure is a key extractor:
///
/// ```
/// use pradix::core::KeyExtractor;
///
/// let key = |pair: &(u32, char)| pair.0;
/// assert_eq!(key.key(&(7, 'x')), 7);
/// ```
pub trait KeyExtractor<T: ?Sized> {
    /// The key type produced for each record.
    type Key: RadixKey;

    /// Returns the key of `item`.
    fn key(&self, item: &T) -> Self::Key;
}

impl<T: ?Sized, K: RadixKey, F: Fn(&T) -> K> KeyExtractor<T> for F {
    type Key = K;

    #[inline(always)]
    fn key(&self, item: &T) -> K {
        self(item)
    }
}

/// Strict weak ordering over records, used for partitions small enough
/// to bypass bucketing.
pub trait Comparator<T: ?Sized> {
    /// Compares two records.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for F {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders records by the key of a [`KeyExtractor`] and nothing else.
///
/// Records with equal keys compare equal, so the stable fallback sort keeps
/// their relative order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByKey<H>(pub H);

impl<T: ?Sized, H: KeyExtractor<T>> Comparator<T> for ByKey<H> {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.key(a).cmp(&self.0.key(b))
    }
}
