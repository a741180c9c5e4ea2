//! Error types for store mutations and export

use thiserror::Error;

use crate::model::SaveToken;

/// Errors from concept store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("concept name must not be empty")]
    EmptyName,

    #[error("save proposal {0} is not pending or the store changed since it was made")]
    StaleProposal(SaveToken),
}

/// Errors from building an export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("there are no concepts to export")]
    Empty,

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
