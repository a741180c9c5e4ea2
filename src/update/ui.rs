//! Navigation and form binding

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::{AppModel, FormState, View};

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::StartCreate => {
            model.ui.show_form(FormState::create());
            Some(Cmd::Redraw)
        }

        UiMsg::StartEdit => {
            let concept = model.selected_concept()?.clone();
            model.ui.show_form(FormState::edit(&concept));
            Some(Cmd::Redraw)
        }

        UiMsg::CancelForm => {
            let original = model
                .ui
                .form
                .take()
                .and_then(|form| form.original_name);
            model.ui.pending_save = None;
            match original {
                // Cancel edit -> back to that concept
                Some(name) => model.ui.show_detail(name),
                // Cancel create -> back to whatever was selected before
                None if model.ui.selected.is_some() => model.ui.view = View::Detail,
                None => model.ui.show_empty(),
            }
            Some(Cmd::Redraw)
        }

        UiMsg::Back => {
            model.ui.show_empty();
            Some(Cmd::Redraw)
        }

        UiMsg::Select(name) => {
            model.ui.show_detail(name);
            Some(Cmd::Redraw)
        }

        UiMsg::SetSearch(text) => {
            model.ui.search = text;
            Some(Cmd::Redraw)
        }

        UiMsg::UpdateDraft(field, value) => {
            let form = model.ui.form.as_mut()?;
            form.set_field(field, value);
            None
        }
    }
}
