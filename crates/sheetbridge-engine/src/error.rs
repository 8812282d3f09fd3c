//! Error types for sheetbridge-engine

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors an engine may report when creating resources.
///
/// Status-returning operations do not use this type; they return the engine's
/// raw status code instead. `Error` covers the handle-producing operations
/// (`workbook_new`, `add_worksheet`, `add_format`), where there is no status
/// channel to reuse.
#[derive(Debug, Error)]
pub enum Error {
    /// The output path could not be opened for writing
    #[error("Cannot open workbook path: {0}")]
    WorkbookPath(String),

    /// Sheet name rejected by the engine (duplicate, too long, bad characters)
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// The referenced workbook is not known to the engine
    #[error("Unknown workbook id: {0}")]
    UnknownWorkbook(u32),

    /// Any other engine-side failure, reported as an opaque message
    #[error("Engine error: {0}")]
    Engine(String),
}

impl Error {
    /// Create a generic engine error with a message
    pub fn engine<S: Into<String>>(msg: S) -> Self {
        Error::Engine(msg.into())
    }
}
