//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while building a [`FixedArray`](crate::FixedArray).
///
/// Appending to a full array is not an error: the value is discarded
/// silently and no `ArrayError` is produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The requested capacity is above the configured ceiling.
    CapacityTooLarge {
        /// Number of elements requested.
        requested: usize,
        /// Largest capacity the config permits.
        max: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityTooLarge { requested, max } => {
                write!(
                    f,
                    "array capacity too large: requested {requested} elements, max {max} elements"
                )
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_limits() {
        let err = ArrayError::CapacityTooLarge {
            requested: 100,
            max: 64,
        };
        assert_eq!(
            err.to_string(),
            "array capacity too large: requested 100 elements, max 64 elements"
        );
    }
}
