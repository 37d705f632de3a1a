//! Error type shared by every fallible `HashTable` operation

use thiserror::Error;

/// Errors reported by the hash table
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The raising lookup path found no entry for the key
    #[error("key not found")]
    KeyNotFound,

    /// The strict insert path found the key already present
    #[error("key already exists")]
    DuplicateKey,

    /// A table cannot be built with zero buckets
    #[error("invalid capacity: {capacity} (must be greater than zero)")]
    InvalidCapacity {
        /// The rejected bucket count
        capacity: usize,
    },
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
