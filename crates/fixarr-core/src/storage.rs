//! The owned storage block behind a [`FixedArray`](crate::FixedArray).
//!
//! A [`Storage`] is a contiguous boxed slice allocated to full capacity
//! once, at construction. It has no growth path: the length of the block
//! is the capacity for the block's whole lifetime.

/// Element type held by the array.
pub type Element = i32;

/// A contiguous, exclusively owned block of element slots.
///
/// Slots are zero-filled at allocation. The block is freed when the
/// `Storage` is dropped, which happens exactly once, when its owning
/// array goes out of scope.
pub struct Storage {
    /// Backing memory. Allocated to full capacity at creation.
    slots: Box<[Element]>,
}

impl Storage {
    /// Allocate a zero-filled block with room for `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity].into_boxed_slice(),
        }
    }

    /// Overwrite the slot at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= capacity`. Callers bound the offset by the
    /// array's size, which never reaches capacity here.
    pub(crate) fn write(&mut self, offset: usize, value: Element) {
        self.slots[offset] = value;
    }

    /// Shared view of the first `len` slots.
    ///
    /// # Panics
    ///
    /// Panics if `len > capacity`.
    pub(crate) fn prefix(&self, len: usize) -> &[Element] {
        &self.slots[..len]
    }

    /// Total capacity in elements.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Memory usage of the block in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<Element>()
    }
}
