//! Demonstration program for `fixarr-core`.
//!
//! Builds one [`FixedArray`], appends the requested values and prints the
//! array to the given writer. The binary in `main.rs` is a thin wrapper
//! that parses [`Cli`] and installs logging.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;

use std::io::Write;

use anyhow::{Context, Result};
use fixarr_core::FixedArray;

pub use cli::Cli;

/// What a demo run did, for logging and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Elements kept in the array.
    pub len: usize,
    /// Capacity the array was built with.
    pub capacity: usize,
    /// Values that arrived after the array was full.
    pub discarded: usize,
}

/// Build the array described by `cli`, fill it, and print it to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<RunSummary> {
    let config = cli.config();
    let mut array = FixedArray::with_config(&config).context("invalid array configuration")?;
    tracing::debug!(
        capacity = config.capacity,
        bytes = config.storage_bytes(),
        "array allocated"
    );

    for &value in &cli.values {
        array.push_back(value);
    }

    array
        .print_to(out)
        .context("failed to write array to output")?;

    Ok(RunSummary {
        len: array.len(),
        capacity: array.capacity(),
        discarded: cli.values.len() - array.len(),
    })
}
