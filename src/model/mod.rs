//! Application model - the complete state of the library
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod concept;
pub mod store;
pub mod ui;

pub use concept::{name_key, Concept, ConceptField};
pub use store::{
    ConceptStore, ImportSummary, SaveDecision, SaveOutcome, SaveProposal, SaveToken,
};
pub use ui::{FormState, UiState, View};

use crate::config::LibraryConfig;

/// One row of the sidebar list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem<'a> {
    pub name: &'a str,
    /// Highlighted as the current selection
    pub active: bool,
}

/// The complete application model
#[derive(Debug, Clone, Default)]
pub struct AppModel {
    /// Concept list
    pub library: ConceptStore,
    /// View, selection, form and notices
    pub ui: UiState,
    /// Loaded configuration
    pub config: LibraryConfig,
}

impl AppModel {
    pub fn new(config: LibraryConfig) -> Self {
        Self {
            library: ConceptStore::new(),
            ui: UiState::new(),
            config,
        }
    }

    /// Model with a pre-filled library, nothing selected
    pub fn with_concepts(concepts: impl IntoIterator<Item = Concept>) -> Self {
        Self {
            library: ConceptStore::from_concepts(concepts),
            ..Self::default()
        }
    }

    /// Concepts matching the search filter, with the selection highlighted
    pub fn sidebar_items(&self) -> Vec<SidebarItem<'_>> {
        self.library
            .filter(&self.ui.search)
            .map(|concept| SidebarItem {
                name: &concept.name,
                active: self.ui.is_selected(&concept.name),
            })
            .collect()
    }

    /// Concept shown in the detail panel
    pub fn detail(&self) -> Option<&Concept> {
        if self.ui.view != View::Detail {
            return None;
        }
        self.selected_concept()
    }

    pub fn selected_concept(&self) -> Option<&Concept> {
        self.ui
            .selected
            .as_deref()
            .and_then(|name| self.library.find_by_name(name))
    }

    /// Detail or form is showing; on narrow screens the list is hidden
    pub fn is_detail_mode(&self) -> bool {
        matches!(self.ui.view, View::Detail | View::Form)
    }

    /// Whether leaving the page should warn about unexported changes
    pub fn has_unsaved_changes(&self) -> bool {
        self.library.is_dirty()
    }
}

/// Reconcile the view with the store after an update
///
/// A detail view whose concept no longer exists falls back to the empty view.
pub fn sync_view(model: &mut AppModel) {
    if model.ui.view == View::Detail && model.selected_concept().is_none() {
        tracing::debug!(selected = ?model.ui.selected, "selected concept is gone");
        model.ui.show_empty();
    }
}
