//! brightwave - pitch-tracking harmonizer with a terminal display
//!
//! Run with: cargo run --release
//!
//! Logs go to `brightwave.log` (filter with `RUST_LOG`), since the terminal
//! belongs to the display.

mod app;
mod ui;

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use std::{fs::File, sync::Mutex};
use tracing_subscriber::EnvFilter;

use app::Brightwave;
use brightwave::HarmonizerConfig;

const LOG_FILE: &str = "brightwave.log";

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_logging()?;

    Brightwave::new()
        .config(HarmonizerConfig::default())
        .run()
}

fn init_logging() -> EyreResult<()> {
    let file = File::create(LOG_FILE).wrap_err_with(|| format!("failed to create {LOG_FILE}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
