//! App message handlers (startup, host I/O results, page lifecycle)

use crate::commands::Cmd;
use crate::locale;
use crate::messages::{AppMsg, LibraryMsg};
use crate::model::AppModel;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Initialize { missing_hooks } => {
            if missing_hooks.is_empty() {
                tracing::info!("App initialized successfully");
                return Some(Cmd::Redraw);
            }
            for hook in &missing_hooks {
                tracing::error!("UI hook not found: {}", hook);
            }
            if model.ui.init_alert_shown {
                return Some(Cmd::Redraw);
            }
            model.ui.init_alert_shown = true;
            let notice = locale::init_failed(&missing_hooks.join(", "));
            model.ui.set_status(notice.clone());
            Some(Cmd::redraw_with_notice(notice))
        }

        AppMsg::RequestImport => Some(Cmd::PickImportFile),

        AppMsg::ImportFileLoaded(result) => match result {
            Ok(text) => super::update_library(model, LibraryMsg::ImportText(text)),
            Err(e) => {
                tracing::warn!("Import file could not be read: {}", e);
                let notice = locale::file_read_failed(&e);
                model.ui.set_status(notice.clone());
                Some(Cmd::ShowNotice(notice))
            }
        },

        AppMsg::ExportCompleted(result) => match result {
            Ok(()) => {
                model.library.mark_exported();
                tracing::info!("Export acknowledged, unsaved flag cleared");
                None
            }
            Err(e) => {
                tracing::warn!("Export download failed: {}", e);
                let notice = locale::export_failed(&e);
                model.ui.set_status(notice.clone());
                Some(Cmd::ShowNotice(notice))
            }
        },

        AppMsg::BeforeUnload => model
            .has_unsaved_changes()
            .then_some(Cmd::WarnUnsavedChanges),
    }
}
