//! # sheetbridge-engine
//!
//! The capability interface between the sheetbridge FFI layer and whichever
//! spreadsheet-generation engine the embedding application links in.
//!
//! The bridge never builds spreadsheet files itself. Everything it forwards goes
//! through [`SheetEngine`], an object-safe trait whose methods map 1:1 onto the
//! operations the legacy host is allowed to call. Engine-side resources are
//! referred to by small id newtypes ([`WorkbookId`], [`SheetId`], [`FormatId`])
//! that are meaningful only to the engine that issued them.
//!
//! Status-returning operations yield the engine's raw `i32` status unchanged;
//! `0` means success by convention and anything else is engine-defined.

pub mod datetime;
pub mod error;
pub mod ids;
pub mod style;
pub mod testing;

mod engine;

pub use datetime::DateTime;
pub use error::{Error, Result};
pub use ids::{FormatId, SheetId, WorkbookId};
pub use style::{BorderLine, CellAlign};

pub use engine::{EngineStatus, SheetEngine, ENGINE_OK};
