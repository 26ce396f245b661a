//! Command-line interface definitions for the demo.

use clap::Parser;
use fixarr_core::{ArrayConfig, Element};

/// Build a fixed-capacity array, append values, print it.
#[derive(Parser, Debug)]
#[command(name = "fixarr-demo", version, about)]
pub struct Cli {
    /// Number of slots to allocate.
    #[arg(long, short = 'c', default_value_t = ArrayConfig::DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Refuse capacities above this many elements.
    #[arg(long, default_value_t = ArrayConfig::DEFAULT_MAX_CAPACITY)]
    pub max_capacity: usize,

    /// Values to append, in order. Values past capacity are discarded.
    #[arg(default_values_t = [1, 2, 3], allow_negative_numbers = true)]
    pub values: Vec<Element>,
}

impl Cli {
    /// The array config described by the flags.
    pub fn config(&self) -> ArrayConfig {
        ArrayConfig {
            capacity: self.capacity,
            max_capacity: self.max_capacity,
        }
    }
}
