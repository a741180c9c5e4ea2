//! Tracing setup and state snapshots for debugging
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=frayer::model::store=debug` - store mutations only
//!
//! # Log Files
//!
//! Logs are written to `~/.config/frayer-library/logs/frayer.log` with daily
//! rotation, always at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::model::{AppModel, View};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). Call once from the host.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of library and view state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibrarySnapshot {
    pub concept_count: usize,
    pub dirty: bool,
    pub view: View,
    pub selected: Option<String>,
    pub pending_save: bool,
}

impl LibrarySnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            concept_count: model.library.len(),
            dirty: model.library.is_dirty(),
            view: model.ui.view,
            selected: model.ui.selected.clone(),
            pending_save: model.ui.pending_save.is_some(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &LibrarySnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.concept_count != other.concept_count {
            changes.push(format!(
                "concepts: {} → {}",
                self.concept_count, other.concept_count
            ));
        }
        if self.dirty != other.dirty {
            changes.push(format!("dirty: {} → {}", self.dirty, other.dirty));
        }
        if self.view != other.view {
            changes.push(format!("view: {:?} → {:?}", self.view, other.view));
        }
        if self.selected != other.selected {
            changes.push(format!(
                "selected: {:?} → {:?}",
                self.selected, other.selected
            ));
        }
        if self.pending_save != other.pending_save {
            let status = if other.pending_save { "awaiting" } else { "none" };
            changes.push(format!("overwrite prompt: {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
