//! Error types for pradix.

/// Errors returned by the sorting entry points.
///
/// All of them are raised before the first element is moved or written,
/// except [`SortError::Spawn`], after which the contents of the range (or
/// destination) are unspecified.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SortError {
    /// A record's key is larger than the `max_key` passed by the caller.
    #[error("key {key} at index {index} exceeds the declared maximum {max}")]
    KeyOutOfRange {
        /// Position of the offending record in the input.
        index: usize,
        /// The key it produced.
        key: u128,
        /// The declared maximum.
        max: u128,
    },

    /// The copy-sort destination cannot hold the source.
    #[error("destination holds {actual} records but {required} are required")]
    DestinationTooSmall {
        /// Length of the source.
        required: usize,
        /// Length of the destination.
        actual: usize,
    },

    /// A [`SortConfig`](crate::config::SortConfig) field is out of range.
    #[error("invalid sort configuration: {0}")]
    InvalidConfig(&'static str),

    /// The operating system refused to start a worker thread.
    #[error("failed to spawn sort worker: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SortError>;
