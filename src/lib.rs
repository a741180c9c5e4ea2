//! Frayer Library - Elm-style core of a concept glossary
//!
//! This crate provides the core types and logic for a small Frayer model
//! library: a sorted concept store with rename-aware saving, CSV import and
//! export, and an update loop a UI host drives with messages.

pub mod collation;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod csv;
pub mod error;
pub mod locale;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::LibraryConfig;
pub use error::{ExportError, StoreError};
pub use messages::Msg;
pub use model::{AppModel, Concept, ConceptStore};
