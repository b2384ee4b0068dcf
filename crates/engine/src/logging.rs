//! File logging.
//!
//! The terminal is in raw mode on the alternate screen while the game runs, so
//! log lines go to a file or nowhere.

use std::fs::OpenOptions;

use anyhow::{Context, Result};

use crate::config::GameConfig;

/// Install the global logger when `SNAKE_LOG_PATH` is configured.
///
/// Returns `false` (and installs nothing) when logging is disabled.
pub fn init_logging(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {} {} {}",
                chrono::Local::now().format("%H:%M:%S%.6f"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(config.log_level)
        .chain(file)
        .apply()
        .context("logging initialization failed")?;

    Ok(true)
}
