//! Benchmark profiles and fixtures for the fixarr workspace.
//!
//! - [`filled_array`]: an array with the first `count` ascending values
//! - [`ascending_values`]: the value sequence the fixtures append
//! - [`REFERENCE_CAPACITY`]: 10K slots, the size the benches use

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fixarr_core::{Element, FixedArray};

/// Capacity used by the reference benchmarks.
pub const REFERENCE_CAPACITY: usize = 10_000;

/// `1, 2, ..., count` as elements.
///
/// Values saturate at `i32::MAX` rather than wrapping.
pub fn ascending_values(count: usize) -> Vec<Element> {
    (1..=count)
        .map(|v| Element::try_from(v).unwrap_or(Element::MAX))
        .collect()
}

/// Build an array of `capacity` slots and append `ascending_values(count)`.
///
/// When `count > capacity` the tail is discarded by the array itself.
pub fn filled_array(capacity: usize, count: usize) -> FixedArray {
    let mut array = FixedArray::new(capacity);
    for value in ascending_values(count) {
        array.push_back(value);
    }
    array
}
