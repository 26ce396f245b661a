//! `fixarr-demo`: build a fixed-capacity array, append, print.
//!
//! The array goes to stdout. Logs go to stderr, filtered by `RUST_LOG`
//! (default `warn`).

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use fixarr_cli::{run, Cli};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn setup_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init();
}

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let summary = run(&cli, &mut stdout.lock())?;
    tracing::info!(
        len = summary.len,
        capacity = summary.capacity,
        discarded = summary.discarded,
        "demo finished"
    );
    Ok(())
}
