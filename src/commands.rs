//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update. The
//! core never touches files, dialogs or downloads itself.

use crate::model::SaveToken;

/// Side effects requested by `update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-render list and content panel
    Redraw,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Show a notice to the user (alert, toast)
    ShowNotice(String),
    /// Ask the user whether to overwrite; answer with
    /// `LibraryMsg::ResolveOverwrite { token, .. }`
    ConfirmOverwrite { token: SaveToken, prompt: String },
    /// Let the user pick a file and read it as UTF-8; answer with
    /// `AppMsg::ImportFileLoaded`
    PickImportFile,
    /// Offer `content` as a download; answer with `AppMsg::ExportCompleted`
    OfferDownload { file_name: String, content: String },
    /// Ask the browser to warn before leaving the page
    WarnUnsavedChanges,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Redraw followed by a notice
    pub fn redraw_with_notice(message: impl Into<String>) -> Self {
        Cmd::Batch(vec![Cmd::Redraw, Cmd::ShowNotice(message.into())])
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            _ => false,
        }
    }

    /// Notice text carried by this command or any batched command
    pub fn notice(&self) -> Option<&str> {
        match self {
            Cmd::ShowNotice(message) => Some(message),
            Cmd::Batch(cmds) => cmds.iter().find_map(|c| c.notice()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(Cmd::Redraw.needs_redraw());
        assert!(Cmd::redraw_with_notice("x").needs_redraw());
        assert!(!Cmd::ShowNotice("x".into()).needs_redraw());
    }

    #[test]
    fn test_notice_in_batch() {
        assert_eq!(Cmd::redraw_with_notice("kész").notice(), Some("kész"));
        assert_eq!(Cmd::Redraw.notice(), None);
    }
}
