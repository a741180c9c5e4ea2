//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod library;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{sync_view, AppModel};

#[cfg(debug_assertions)]
use crate::tracing::LibrarySnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use library::update_library;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::Library(m) => library::update_library(model, m),
        Msg::App(m) => app::update_app(model, m),
    };

    sync_view(model);
    result
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = LibrarySnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = LibrarySnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "library", %diff, "state changed");
    }

    model.library.assert_invariants();
    result
}

/// Get a display name for a message type
///
/// Import payloads are summarized by size instead of printed.
/// Example outputs:
/// - `Ui::Select("Prím")`
/// - `Library::ImportText(<812 bytes>)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::{AppMsg, LibraryMsg};

    match msg {
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::Library(LibraryMsg::ImportText(text)) => {
            format!("Library::ImportText(<{} bytes>)", text.len())
        }
        Msg::Library(m) => format!("Library::{:?}", m),
        Msg::App(AppMsg::ImportFileLoaded(Ok(text))) => {
            format!("App::ImportFileLoaded(Ok(<{} bytes>))", text.len())
        }
        Msg::App(m) => format!("App::{:?}", m),
    }
}
