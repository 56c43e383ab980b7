//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "rafter";
const APPLICATION: &str = "useref-demo";

/// Log file used when no cache directory is available.
const FALLBACK_LOG: &str = "useref-demo.log";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for temporary/regenerable data.
///
/// - Linux: `$XDG_CACHE_HOME/useref-demo` or `~/.cache/useref-demo`
/// - macOS: `~/Library/Caches/dev.rafter.useref-demo`
/// - Windows: `C:\Users\<User>\AppData\Local\rafter\useref-demo\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path of the log file, creating its directory when needed.
///
/// Falls back to a file in the working directory when there is no cache
/// directory or it cannot be created.
pub fn log_file() -> PathBuf {
    match cache_dir() {
        Some(dir) if fs::create_dir_all(&dir).is_ok() => dir.join("latest.log"),
        _ => PathBuf::from(FALLBACK_LOG),
    }
}
