//! # Chained Hash Table
//!
//! A Rust implementation of a hash table that resolves collisions by separate chaining.
//!
//! `HashTable` keeps one chain of entries per bucket. A key's bucket is its hash folded into
//! `[0, capacity)`; the entry is then found by a linear scan of that chain. Before an insertion
//! would push the load factor above 0.75 the table doubles its bucket count and rehashes every
//! entry, so chains stay short on average.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chaintable::{Error, HashTable};
//!
//! // Create a new table with the default 11 buckets
//! let mut table = HashTable::new();
//!
//! // Strict insertion rejects keys that are already present
//! table.insert("apple".to_string(), 1).unwrap();
//! assert_eq!(table.insert("apple".to_string(), 2), Err(Error::DuplicateKey));
//!
//! // `set` overwrites instead
//! table.set("apple".to_string(), 10);
//! assert_eq!(table.get("apple"), Ok(&10));
//! assert_eq!(table["apple"], 10);
//!
//! // Absence is an error on `get` and `None` on `try_get`
//! assert_eq!(table.get("banana"), Err(Error::KeyNotFound));
//! assert_eq!(table.try_get("banana"), None);
//!
//! // Remove values
//! assert!(table.remove("apple"));
//! assert!(!table.contains_key("apple"));
//! ```
//!
//! ## Growth
//!
//! ```rust
//! use chaintable::{HashTable, HashTableExtensions};
//!
//! let mut table = HashTable::with_capacity(1).unwrap();
//! table.set("a", 1);
//! table.set("b", 2);
//! table.set("b", 3);
//!
//! assert_eq!(table.len(), 2);
//! assert!(table.capacity() > 1);
//! assert_eq!(table.chain_stats().len, 2);
//! ```

/// Construction options and table constants
mod config;
/// Key-value pair stored in bucket chains
mod entry;
/// Error type and result alias
mod error;
/// Module implementing the separately chained hash table
mod hash_table;
/// Logger setup for the binaries
mod logger;
/// Utility types and traits for inspecting tables
mod utils;

pub use config::{DEFAULT_CAPACITY, MAX_LOAD_FACTOR, TableConfig};
pub use error::{Error, Result};
pub use hash_table::HashTable;
pub use logger::initialize_logger;
pub use utils::{ChainStats, HashTableExtensions};
