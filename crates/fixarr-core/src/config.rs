//! Array configuration parameters.

use crate::error::ArrayError;
use crate::storage::Element;

/// Configuration for building a [`FixedArray`](crate::FixedArray).
///
/// Plain [`FixedArray::new`](crate::FixedArray::new) accepts any capacity.
/// Going through a config adds a ceiling check, which matters when the
/// capacity comes from user input (the demo binary does this).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of element slots to allocate.
    ///
    /// Default: 10.
    pub capacity: usize,

    /// Largest capacity [`validate`](Self::validate) accepts.
    ///
    /// Default: 2^28 elements, i.e. 1GB of `i32` storage.
    pub max_capacity: usize,
}

impl ArrayConfig {
    /// Default capacity, matching the demo program.
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Default ceiling: 1GB / 4 bytes = 256M elements.
    pub const DEFAULT_MAX_CAPACITY: usize = 1 << 28;

    /// Create a config for the given capacity with the default ceiling.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    /// Check the capacity against the ceiling.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.capacity > self.max_capacity {
            return Err(ArrayError::CapacityTooLarge {
                requested: self.capacity,
                max: self.max_capacity,
            });
        }
        Ok(())
    }

    /// Size of the storage block this config describes, in bytes.
    pub fn storage_bytes(&self) -> usize {
        self.capacity * std::mem::size_of::<Element>()
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
