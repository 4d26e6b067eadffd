//! File-backed logger setup.
//!
//! The game owns the terminal's alternate screen, so log output goes to
//! `~/.dragonflap/dragonflap.log` instead of stderr. Filtering follows
//! `RUST_LOG` and defaults to `info`.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use super::persistence::data_path;

pub const LOG_FILE_NAME: &str = "dragonflap.log";

/// Initialise `env_logger` appending to the default log file.
///
/// Returns the path written to so the caller can mention it on failure.
pub fn init() -> io::Result<PathBuf> {
    let path = data_path(LOG_FILE_NAME)?;
    init_with_file(&path)?;
    Ok(path)
}

/// Initialise `env_logger` appending to `path`.
///
/// Calling this more than once is harmless; later calls keep the first
/// logger.
pub fn init_with_file(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();
    Ok(())
}
