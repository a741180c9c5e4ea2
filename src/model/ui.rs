//! UI state - which panel is shown, selection, search and the edit form

use super::concept::{Concept, ConceptField};
use super::store::SaveToken;
use crate::locale;

/// Which content panel is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Nothing selected
    #[default]
    Empty,
    /// Frayer card of the selected concept
    Detail,
    /// Create/edit form
    Form,
}

/// State of the create/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Name of the concept being edited; `None` when creating
    pub original_name: Option<String>,
    /// Current field values
    pub draft: Concept,
}

impl FormState {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(concept: &Concept) -> Self {
        Self {
            original_name: Some(concept.name.clone()),
            draft: concept.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.original_name.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            locale::FORM_TITLE_EDIT
        } else {
            locale::FORM_TITLE_CREATE
        }
    }

    pub fn set_field(&mut self, field: ConceptField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }
}

/// UI state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub view: View,
    /// Name of the selected concept
    pub selected: Option<String>,
    /// Sidebar filter text
    pub search: String,
    /// Form contents while creating or editing
    pub form: Option<FormState>,
    /// Save waiting for an overwrite decision
    pub pending_save: Option<SaveToken>,
    /// Last notice shown to the user
    pub status_message: String,
    /// The initialization alert is shown at most once
    pub init_alert_shown: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Show the detail panel for `name`
    pub fn show_detail(&mut self, name: impl Into<String>) {
        self.selected = Some(name.into());
        self.view = View::Detail;
        self.form = None;
        self.pending_save = None;
    }

    /// Back to the empty panel with nothing selected
    pub fn show_empty(&mut self) {
        self.selected = None;
        self.view = View::Empty;
        self.form = None;
        self.pending_save = None;
    }

    /// Open the form
    pub fn show_form(&mut self, form: FormState) {
        self.form = Some(form);
        self.view = View::Form;
        self.pending_save = None;
    }

    /// Whether the selected concept is `name` (exact match, as rendered)
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.as_deref() == Some(name)
    }
}
