//! Where the library looks for its config and writes its logs
//!
//! - Unix/macOS: `$XDG_CONFIG_HOME/frayer-library/` or `~/.config/frayer-library/`
//! - Windows: `%APPDATA%\frayer-library\`

use std::path::PathBuf;

const APP_DIR: &str = "frayer-library";

/// Prefix of the daily-rotated log files
pub const LOG_FILE_PREFIX: &str = "frayer.log";

/// Base directory for config and logs
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = std::env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

    base.map(|base| base.join(APP_DIR))
}

/// `<config dir>/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    Some(config_dir()?.join("config.yaml"))
}

/// `<config dir>/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    Some(config_dir()?.join("logs"))
}

/// Create the logs dir if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    std::fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create {}: {}", logs.display(), e))?;
    Ok(logs)
}
