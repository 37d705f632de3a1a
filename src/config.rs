//! Construction options for `HashTable`

use crate::error::{Error, Result};

/// Bucket count used when the caller does not pick one
pub const DEFAULT_CAPACITY: usize = 11;

/// Load factor ceiling; a table grows before an insertion would leave it above this ratio
pub const MAX_LOAD_FACTOR: f64 = 0.75;

/// Options a `HashTable` is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of buckets allocated up front
    pub initial_capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { initial_capacity: DEFAULT_CAPACITY }
    }
}

impl TableConfig {
    /// Creates a config with the default initial capacity
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial bucket count
    #[must_use]
    pub const fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Checks that the config describes a usable table
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] when the initial capacity is zero.
    pub const fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(Error::InvalidCapacity { capacity: self.initial_capacity });
        }
        Ok(())
    }
}
