//! The fixed-capacity array and its bounded append.
//!
//! [`FixedArray`] owns one `Storage` block sized at construction. Values
//! are appended at the end until the block is full; after that every
//! append is discarded without an error. Only the occupied prefix is ever
//! visible through the public API.

use std::fmt;
use std::io::{self, Write};

use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::storage::{Element, Storage};

/// An integer array with a capacity fixed at construction.
///
/// Construction is always an explicit call to [`FixedArray::new`] or
/// [`FixedArray::with_config`]. There is no `From<usize>` impl, so a bare
/// number is never accepted where an array is expected:
///
/// ```compile_fail
/// use fixarr_core::FixedArray;
///
/// fn takes(_array: FixedArray) {}
/// takes(10usize.into());
/// ```
///
/// The array is neither `Clone` nor `Copy`. Its storage is released when
/// the array is dropped, on every exit path including unwinding.
///
/// ```
/// use fixarr_core::FixedArray;
///
/// let mut array = FixedArray::new(2);
/// array.push_back(1);
/// array.push_back(2);
/// array.push_back(3); // full, silently discarded
/// assert_eq!(array.to_string(), "1 2");
/// ```
pub struct FixedArray {
    storage: Storage,
    /// Number of occupied slots. Always `<= storage.capacity()`.
    len: usize,
}

impl FixedArray {
    /// Create an empty array with room for exactly `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            storage: Storage::new(capacity),
            len: 0,
        }
    }

    /// Create an empty array from a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityTooLarge`] if `config.capacity`
    /// exceeds `config.max_capacity`. Nothing is allocated in that case.
    pub fn with_config(config: &ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        Ok(Self::new(config.capacity))
    }

    /// Append `value` at the end if there is a free slot.
    ///
    /// When the array is full the value is dropped on the floor: no error,
    /// no panic, no growth.
    pub fn push_back(&mut self, value: Element) {
        if self.is_full() {
            tracing::trace!(capacity = self.capacity(), value, "array full, value discarded");
            return;
        }
        self.storage.write(self.len, value);
        self.len += 1;
    }

    /// The occupied elements, in insertion order.
    pub fn as_slice(&self) -> &[Element] {
        self.storage.prefix(self.len)
    }

    /// The element at `index`, or `None` if that slot is not occupied.
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.as_slice().get(index)
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Total number of slots, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every slot is occupied, so further appends are discarded.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Number of free slots left.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// Memory usage of the owned storage block in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.storage.memory_bytes()
    }

    /// Write the occupied elements, space-separated, followed by a newline.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Print the occupied elements to stdout.
    ///
    /// Debugging aid. A failed write to stdout is logged at debug level
    /// and otherwise ignored.
    pub fn print(&self) {
        let stdout = io::stdout();
        self.print_or_log(&mut stdout.lock());
    }

    fn print_or_log<W: Write>(&self, out: &mut W) {
        if let Err(err) = self.print_to(out) {
            tracing::debug!(%err, "failed to print array");
        }
    }
}

impl fmt::Display for FixedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements = self.as_slice().iter();
        if let Some(first) = elements.next() {
            write!(f, "{first}")?;
            for value in elements {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for FixedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl Drop for FixedArray {
    fn drop(&mut self) {
        tracing::trace!(
            capacity = self.capacity(),
            len = self.len,
            "releasing array storage"
        );
    }
}
