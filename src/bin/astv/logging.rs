//! Tracing subscriber setup
//!
//! `ASTV_LOG` wins over the configured level. Logs go to stderr, except while
//! the terminal viewer owns the screen: then they are dropped unless a log
//! file was given.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ASTV_LOG";

/// Install the global subscriber
///
/// Fails when the log file cannot be created or a subscriber is already set.
pub fn init(level: &str, log_file: Option<&Path>, interactive: bool) -> io::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    let result = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        None if interactive => return Ok(()),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init(),
    };

    result.map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
