//! Library configuration
//!
//! Read from `~/.config/frayer-library/config.yaml` when present. The library
//! never writes this file; a missing or broken file means defaults.

use std::path::Path;

use serde::Deserialize;

use crate::locale;

/// User preferences for the library host
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LibraryConfig {
    /// File name offered for CSV downloads
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
}

fn default_export_file_name() -> String {
    locale::DEFAULT_EXPORT_FILE_NAME.to_string()
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            export_file_name: default_export_file_name(),
        }
    }
}

impl LibraryConfig {
    /// Load config from the user config directory, or defaults
    pub fn load() -> Self {
        match crate::config_paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory available, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_yaml::from_str(&content) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
