use std::{
    borrow::Borrow,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    mem,
    ops::Index,
};

use log::{debug, trace};

use crate::{
    config::{MAX_LOAD_FACTOR, TableConfig},
    entry::Entry,
    error::{Error, Result},
};

/// The entries whose keys map to the same bucket, in insertion order
type Chain<K, V> = Vec<Entry<K, V>>;

/// A hash table resolving collisions by separate chaining.
///
/// Every bucket owns a chain of entries. The table doubles its bucket count and rehashes
/// every entry before an insertion would push the load factor above
/// [`MAX_LOAD_FACTOR`](crate::MAX_LOAD_FACTOR). Buckets are never released on removal.
///
/// Note: This implementation is not thread-safe; mutation requires exclusive access.
#[derive(Debug, Clone)]
pub struct HashTable<K, V> {
    /// One chain per bucket; the length of this vector is the table's capacity
    buckets: Vec<Chain<K, V>>,
    /// Number of distinct keys stored
    count: usize,
}

impl<K, V> Default for HashTable<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for HashTable<K, V>
where
    K: Eq + Hash,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for HashTable<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K, Q, V> Index<&Q> for HashTable<K, V>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    type Output = V;

    /// Returns the value stored for `key`
    ///
    /// # Panics
    ///
    /// Panics if the key is not present. Use [`HashTable::get`] to handle absence.
    #[allow(clippy::panic)]
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

/// Hashes a key with the deterministic default hasher, read as a signed integer
fn signed_hash<Q: ?Sized + Hash>(key: &Q) -> i64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    i64::from_ne_bytes(hasher.finish().to_ne_bytes())
}

/// Maps a key to a bucket in `[0, capacity)`.
///
/// `rem_euclid` folds negative hashes into range, the same result as
/// `((hash % capacity) + capacity) % capacity`. `capacity` must be non-zero.
fn bucket_index<Q: ?Sized + Hash>(key: &Q, capacity: usize) -> usize {
    let capacity = i64::try_from(capacity).unwrap_or(i64::MAX);
    let index = signed_hash(key).rem_euclid(capacity);
    usize::try_from(index).unwrap_or_default()
}

/// Allocates `capacity` empty chains
fn allocate_buckets<K, V>(capacity: usize) -> Vec<Chain<K, V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Vec::new);
    buckets
}

impl<K, V> HashTable<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty table with the default capacity of 11 buckets
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(TableConfig::default())
    }

    /// Creates an empty table with `capacity` buckets
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(TableConfig::new().with_initial_capacity(capacity))
    }

    /// Creates an empty table from a [`TableConfig`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if the configured capacity is zero.
    pub fn with_config(config: TableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Builds the table once the config is known to be valid
    fn from_valid_config(config: TableConfig) -> Self {
        Self { buckets: allocate_buckets(config.initial_capacity), count: 0 }
    }

    /// Bucket index of `key` under the current capacity
    fn index_of<Q: ?Sized + Hash>(&self, key: &Q) -> usize {
        bucket_index(key, self.buckets.len())
    }

    /// Finds the entry for `key`
    fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets.get(self.index_of(key))?.iter().find(|entry| entry.key().borrow() == key)
    }

    /// Adds a key-value pair, failing if the key is already present.
    ///
    /// The table is left untouched when the key exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if `key` is already stored.
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        if self.contains_key(&key) {
            return Err(Error::DuplicateKey);
        }
        self.push_new(key, value);
        Ok(())
    }

    /// Stores `value` under `key`, replacing the existing entry if there is one.
    ///
    /// Returns the value of the replaced entry.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let index = self.index_of(&key);
        let existing = self
            .buckets
            .get_mut(index)
            .and_then(|chain| chain.iter_mut().find(|entry| entry.key() == &key));
        if let Some(slot) = existing {
            let replaced = mem::replace(slot, Entry::new(key, value));
            trace!("replaced entry in bucket {index}");
            return Some(replaced.into_value());
        }
        self.push_new(key, value);
        None
    }

    /// Appends an entry for a key known to be absent, growing first if needed
    fn push_new(&mut self, key: K, value: V) {
        while self.load_factor_after_insert() > MAX_LOAD_FACTOR {
            if !self.grow() {
                break;
            }
        }

        // `bucket_index` is always below the bucket count, so the chain exists.
        let index = self.index_of(&key);
        if let Some(chain) = self.buckets.get_mut(index) {
            chain.push(Entry::new(key, value));
            self.count = self.count.saturating_add(1);
            trace!("inserted entry into bucket {index}, chain length {}", chain.len());
        }
    }

    /// Load factor the table would have with one more entry
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn load_factor_after_insert(&self) -> f64 {
        self.count.saturating_add(1) as f64 / self.buckets.len() as f64
    }

    /// Doubles the bucket count and moves every entry into its bucket under the new capacity.
    ///
    /// Returns `false` when the capacity can no longer grow.
    fn grow(&mut self) -> bool {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity.saturating_mul(2);
        if new_capacity == old_capacity {
            return false;
        }

        let mut buckets = allocate_buckets(new_capacity);
        for entry in mem::take(&mut self.buckets).into_iter().flatten() {
            let index = bucket_index(entry.key(), new_capacity);
            if let Some(chain) = buckets.get_mut(index) {
                chain.push(entry);
            }
        }
        self.buckets = buckets;

        debug!(
            "grew hash table from {old_capacity} to {new_capacity} buckets ({} entries)",
            self.count
        );
        true
    }

    /// Retrieves the value stored for `key`
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).map(Entry::value).ok_or(Error::KeyNotFound)
    }

    /// Retrieves the value stored for `key`, reporting absence as `None`
    #[must_use]
    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).map(Entry::value)
    }

    /// Returns true if the table holds an entry for `key`
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Returns true if any entry holds `value`.
    ///
    /// Values are not hashed, so this scans every chain.
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.buckets.iter().flatten().any(|entry| entry.value() == value)
    }

    /// Removes the entry for `key` and returns its value
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_of(key);
        let chain = self.buckets.get_mut(index)?;
        let position = chain.iter().position(|entry| entry.key().borrow() == key)?;
        let entry = chain.remove(position);
        self.count = self.count.saturating_sub(1);
        trace!("removed entry from bucket {index}");
        Some(entry.into_value())
    }

    /// Removes the entry for `key`, returning true if one was present
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Clears the table, removing all entries while keeping the bucket count
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.count = 0;
        trace!("cleared hash table, capacity {}", self.buckets.len());
    }

    /// Returns the number of entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current load factor of the table
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.buckets.len() as f64
    }

    /// Length of every chain, in bucket order
    pub(crate) fn chain_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(Vec::len)
    }
}
