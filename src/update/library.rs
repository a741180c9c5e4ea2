//! Concept library updates: save, remove, import, export

use crate::commands::Cmd;
use crate::error::{ExportError, StoreError};
use crate::locale;
use crate::messages::LibraryMsg;
use crate::model::{AppModel, SaveDecision, SaveOutcome, SaveToken};

/// Handle library messages
pub fn update_library(model: &mut AppModel, msg: LibraryMsg) -> Option<Cmd> {
    match msg {
        LibraryMsg::SubmitForm => submit_form(model),
        LibraryMsg::ResolveOverwrite { token, accept } => {
            let decision = if accept {
                SaveDecision::Overwrite
            } else {
                SaveDecision::Cancel
            };
            resolve_save(model, token, decision)
        }
        LibraryMsg::Remove(name) => {
            let removed = model.library.remove(&name)?;
            if model.ui.is_selected(&removed.name) {
                model.ui.show_empty();
            }
            Some(Cmd::Redraw)
        }
        LibraryMsg::ImportText(text) => import_text(model, &text),
        LibraryMsg::Export => export(model),
    }
}

fn submit_form(model: &mut AppModel) -> Option<Cmd> {
    let form = model.ui.form.as_ref()?;
    let original = form.original_name.clone();
    let draft = form.draft.clone();

    let proposal = match model.library.propose_save(original.as_deref(), draft) {
        Ok(proposal) => proposal,
        Err(e) => {
            tracing::debug!("Form rejected: {}", e);
            model.ui.set_status(locale::NAME_REQUIRED);
            return Some(Cmd::ShowNotice(locale::NAME_REQUIRED.to_string()));
        }
    };

    match proposal.collision {
        Some(existing) => {
            model.ui.pending_save = Some(proposal.token);
            Some(Cmd::ConfirmOverwrite {
                token: proposal.token,
                prompt: locale::overwrite_prompt(&existing.name),
            })
        }
        None => resolve_save(model, proposal.token, SaveDecision::Overwrite),
    }
}

fn resolve_save(model: &mut AppModel, token: SaveToken, decision: SaveDecision) -> Option<Cmd> {
    model.ui.pending_save = None;

    match model.library.confirm_save(token, decision) {
        Ok(SaveOutcome::Saved { name, .. }) => {
            model.ui.show_detail(name);
            Some(Cmd::Redraw)
        }
        // The form stays open with its original identity so the user can retry
        Ok(SaveOutcome::Declined) => Some(Cmd::Redraw),
        Err(e @ StoreError::StaleProposal(_)) => {
            tracing::warn!("Ignoring overwrite answer: {}", e);
            model.ui.set_status(locale::SAVE_EXPIRED);
            Some(Cmd::ShowNotice(locale::SAVE_EXPIRED.to_string()))
        }
        Err(e) => {
            tracing::warn!("Save failed: {}", e);
            None
        }
    }
}

fn import_text(model: &mut AppModel, text: &str) -> Option<Cmd> {
    let summary = model.library.import(text);
    let notice = if summary.added > 0 {
        locale::imported(summary.added)
    } else {
        locale::NOTHING_IMPORTED.to_string()
    };
    model.ui.set_status(notice.clone());
    Some(Cmd::redraw_with_notice(notice))
}

fn export(model: &mut AppModel) -> Option<Cmd> {
    match model.library.export() {
        Ok(content) => {
            tracing::info!(
                concepts = model.library.len(),
                bytes = content.len(),
                "export ready"
            );
            Some(Cmd::OfferDownload {
                file_name: model.config.export_file_name.clone(),
                content,
            })
        }
        Err(ExportError::Empty) => {
            model.ui.set_status(locale::NOTHING_TO_EXPORT);
            Some(Cmd::ShowNotice(locale::NOTHING_TO_EXPORT.to_string()))
        }
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            let notice = locale::export_failed(&e.to_string());
            model.ui.set_status(notice.clone());
            Some(Cmd::ShowNotice(notice))
        }
    }
}
