//! Where the app keeps its config file and logs.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "datatable";
const APPLICATION: &str = "datatable-tui";

const CONFIG_FILE: &str = "config.json";
const LATEST_LOG: &str = "latest.log";

/// Archived logs kept after rotation.
const MAX_OLD_LOGS: usize = 25;

fn dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Per-user cache directory; logs live here.
///
/// `~/.cache/datatable-tui` on Linux (honoring `XDG_CACHE_HOME`), the
/// platform cache location elsewhere. `None` without a home directory.
pub fn cache_dir() -> Option<PathBuf> {
    dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Per-user config directory, `~/.config/datatable-tui` on Linux.
pub fn config_dir() -> Option<PathBuf> {
    dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// The config file read when `--config` is not given.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Log file of the current run.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous run's log and prune old archives.
///
/// Runs before the logger opens a fresh `latest.log`.
pub fn rotate_logs() {
    if let Some(cache) = cache_dir() {
        rotate_logs_in(&cache, MAX_OLD_LOGS);
    }
}

/// Rename `dir/latest.log` to a timestamped archive and keep only the `keep`
/// newest archives. A missing directory is left alone.
pub fn rotate_logs_in(dir: &Path, keep: usize) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, dir.join(format!("{}.log", stamp)));
    }

    prune_archives(dir, keep);
}

fn prune_archives(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    let mut archives: Vec<(PathBuf, Option<std::time::SystemTime>)> = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .map(|entry| {
            let modified = entry.metadata().and_then(|meta| meta.modified()).ok();
            (entry.path(), modified)
        })
        .collect();

    // Newest first; everything past `keep` goes.
    archives.sort_by(|a, b| b.1.cmp(&a.1));
    for (path, _) in archives.into_iter().skip(keep) {
        let _ = fs::remove_file(path);
    }
}
