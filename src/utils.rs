//! Utility types and traits for inspecting a `HashTable`

use crate::HashTable;
use std::{borrow::Borrow, hash::Hash};

/// Snapshot of how entries are spread across a table's buckets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainStats {
    /// Number of buckets
    pub capacity: usize,
    /// Number of entries
    pub len: usize,
    /// Buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Entries per bucket
    pub load_factor: f64,
}

impl ChainStats {
    /// Summarises a sequence of chain lengths, one per bucket
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub(crate) fn from_chain_lengths<I: IntoIterator<Item = usize>>(lengths: I) -> Self {
        let mut stats =
            Self { capacity: 0, len: 0, occupied_buckets: 0, longest_chain: 0, load_factor: 0.0 };

        for length in lengths {
            stats.capacity = stats.capacity.saturating_add(1);
            stats.len = stats.len.saturating_add(length);
            if length > 0 {
                stats.occupied_buckets = stats.occupied_buckets.saturating_add(1);
            }
            stats.longest_chain = stats.longest_chain.max(length);
        }

        if stats.capacity > 0 {
            stats.load_factor = stats.len as f64 / stats.capacity as f64;
        }
        stats
    }

    /// Buckets with no entries
    #[must_use]
    pub const fn empty_buckets(&self) -> usize {
        self.capacity.saturating_sub(self.occupied_buckets)
    }

    /// Average chain length over occupied buckets, or 0.0 for an empty table
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn mean_chain_length(&self) -> f64 {
        if self.occupied_buckets == 0 {
            return 0.0;
        }
        self.len as f64 / self.occupied_buckets as f64
    }
}

/// Extension trait for tables that provides additional inspection methods
pub trait HashTableExtensions<K, V> {
    /// Returns the bucket occupancy summary of the table
    fn chain_stats(&self) -> ChainStats;

    /// Returns true if the table contains every one of the given keys
    fn contains_all_keys<Q>(&self, keys: &[&Q]) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;
}

impl<K, V> HashTableExtensions<K, V> for HashTable<K, V>
where
    K: Eq + Hash,
{
    fn chain_stats(&self) -> ChainStats {
        ChainStats::from_chain_lengths(self.chain_lengths())
    }

    fn contains_all_keys<Q>(&self, keys: &[&Q]) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        keys.iter().all(|key| self.contains_key(*key))
    }
}
