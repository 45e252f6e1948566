//! Headless runner for the Life and Rock-Scissors-Paper automata.
//!
//! Usage: `automata-runner [config.json]`. Without a path the default
//! configuration is used.

mod session;
mod telemetry;

use anyhow::{Context, Result};
use automata_core::RunConfig;
use tracing::info;

fn main() -> Result<()> {
    telemetry::init_telemetry()?;

    // Load configuration
    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::from_json_file(&path)
            .with_context(|| format!("failed to load configuration from {}", path))?,
        None => RunConfig::default(),
    };

    info!("Starting automata runner: {:?}", config.automaton);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = session::run(&config, &mut out)?;

    info!(
        "Finished {} generations on a {}x{} grid",
        summary.generations, summary.width, summary.height
    );
    Ok(())
}
