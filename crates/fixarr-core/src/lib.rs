//! Fixed-capacity integer array with bounded append.
//!
//! A [`FixedArray`] owns one contiguous `Storage` block whose size is
//! chosen at construction and never changes. The block type is internal:
//!
//! ```compile_fail
//! use fixarr_core::storage::Storage;
//! ```
//!
//! ```text
//! FixedArray
//! ├── Storage (Box<[i32]>, zero-filled, capacity slots)
//! └── len (occupied prefix, 0..=capacity)
//! ```
//!
//! # Bounded append
//!
//! [`FixedArray::push_back`] writes into the next free slot. Once every
//! slot is occupied, further appends are discarded silently. There is no
//! growth policy.
//!
//! # Enumeration
//!
//! The array renders through [`Display`](std::fmt::Display) as its
//! occupied elements separated by single spaces. Storage past the
//! occupied prefix is never read.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
mod storage;

// Public re-exports for the primary API surface.
pub use array::FixedArray;
pub use config::ArrayConfig;
pub use error::ArrayError;
pub use storage::Element;
