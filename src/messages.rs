//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{ConceptField, SaveToken};

/// Navigation and form binding messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    /// Open an empty form for a new concept
    StartCreate,
    /// Open the form pre-filled with the selected concept
    StartEdit,
    /// Close the form without saving
    CancelForm,
    /// Return to the list (mobile back button)
    Back,
    /// Show a concept's card
    Select(String),
    /// Sidebar search text changed
    SetSearch(String),
    /// A form field changed
    UpdateDraft(ConceptField, String),
}

/// Messages that touch the concept library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryMsg {
    /// Form submitted
    SubmitForm,
    /// Answer to an overwrite prompt
    ResolveOverwrite { token: SaveToken, accept: bool },
    /// Delete a concept
    Remove(String),
    /// Merge the text of an import file
    ImportText(String),
    /// Build an export and offer it for download
    Export,
}

/// Application-level messages (startup, host I/O results, page lifecycle)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Host finished wiring its UI; lists hooks it could not find
    Initialize { missing_hooks: Vec<String> },
    /// User clicked the import button
    RequestImport,
    /// Import file read completed
    ImportFileLoaded(Result<String, String>),
    /// Download offered (or failed)
    ExportCompleted(Result<(), String>),
    /// Page is about to be closed
    BeforeUnload,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Ui(UiMsg),
    Library(LibraryMsg),
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn select(name: impl Into<String>) -> Self {
        Msg::Ui(UiMsg::Select(name.into()))
    }

    pub fn set_field(field: ConceptField, value: impl Into<String>) -> Self {
        Msg::Ui(UiMsg::UpdateDraft(field, value.into()))
    }

    pub fn import_text(text: impl Into<String>) -> Self {
        Msg::Library(LibraryMsg::ImportText(text.into()))
    }
}
