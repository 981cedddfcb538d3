//! File logging.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::paths;

/// Fallback log location when no cache directory is available.
const FALLBACK_LOG: &str = "datatable-tui.log";

/// Start logging to the cache directory at `level`.
///
/// The terminal belongs to the table while the app runs, so logs only go to a
/// file. Returns the log path, or `None` if no log file could be created.
pub fn init(level: LevelFilter) -> Option<PathBuf> {
    paths::rotate_logs();

    let path = paths::log_file().unwrap_or_else(|| PathBuf::from(FALLBACK_LOG));
    let file = create_log_file(&path).ok()?;
    WriteLogger::init(level, Config::default(), file).ok()?;
    log::info!("logging to {} at {}", path.display(), level);
    Some(path)
}

/// Create `path` and any missing parent directories.
pub fn create_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}
