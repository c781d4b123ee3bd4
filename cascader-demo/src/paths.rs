//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "cascader";
const APPLICATION: &str = "cascader";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, used for logs.
///
/// - Linux: `$XDG_CACHE_HOME/cascader` or `~/.cache/cascader`
/// - macOS: `~/Library/Caches/dev.cascader.cascader`
/// - Windows: `C:\Users\<User>\AppData\Local\cascader\cascader\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/cascader` or `~/.config/cascader`
/// - macOS: `~/Library/Application Support/dev.cascader.cascader`
/// - Windows: `C:\Users\<User>\AppData\Roaming\cascader\cascader\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path of the picker config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Path of the latest log file, falling back to the working directory.
pub fn log_file() -> PathBuf {
    match cache_dir() {
        Some(dir) if fs::create_dir_all(&dir).is_ok() => dir.join("latest.log"),
        _ => PathBuf::from("cascader-demo.log"),
    }
}

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 10;

/// Rename latest.log to a timestamped name and prune old logs.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    let latest = cache.join("latest.log");

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = cache.join(format!("{}.log", timestamp));
        let _ = fs::rename(&latest, &archived);
    }

    cleanup_old_logs(&cache);
}

/// Delete archived logs beyond the newest `MAX_OLD_LOGS`.
fn cleanup_old_logs(cache_dir: &Path) {
    let Ok(entries) = fs::read_dir(cache_dir) else { return };

    let mut archived: Vec<(SystemTime, PathBuf)> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "log")
                && path.file_name().is_some_and(|name| name != "latest.log")
        })
        .filter_map(|path| {
            let modified = fs::metadata(&path).and_then(|m| m.modified()).ok()?;
            Some((modified, path))
        })
        .collect();

    // Newest first
    archived.sort_by(|a, b| b.0.cmp(&a.0));
    for (_, path) in archived.into_iter().skip(MAX_OLD_LOGS) {
        if let Err(e) = fs::remove_file(&path) {
            log::debug!("could not remove old log {}: {}", path.display(), e);
        }
    }
}
