//! Crosshair icon generator
//!
//! Writes the 9x9 crosshair to public/images/crosshair_8.png.
//! Takes no arguments. Fails with a non-zero exit if the write fails.

use anyhow::Context;
use crosshair_icon::{config, generator};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Crosshair generator starting...");

    let path = generator::generate()
        .with_context(|| format!("Failed to generate {}", config::OUTPUT_PATH))?;

    tracing::info!("Done: {}", path.display());
    Ok(())
}
