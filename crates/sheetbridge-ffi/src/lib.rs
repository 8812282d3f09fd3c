//! # sheetbridge-ffi
//!
//! Flat C FFI surface bridging a legacy 4GL host runtime to a spreadsheet
//! engine.
//!
//! Every export does three things and nothing more: validate the opaque
//! handles the host passes in, decode legacy single-byte text to UTF-8, and
//! forward the call to the installed [`SheetEngine`](sheetbridge_engine::SheetEngine).
//! Engine status codes pass
//! through unchanged; bridge-detected failures use the negative `PB_ERR_*`
//! sentinels, which never collide with engine statuses.
//!
//! Exports use `extern "system"`: stdcall on the 32-bit Windows hosts the
//! legacy runtime lives on, the platform C convention elsewhere. No panic
//! ever crosses the boundary.
//!
//! The embedding application installs the engine once at startup:
//!
//! ```rust
//! use sheetbridge_engine::testing::RecordingEngine;
//!
//! let (engine, _recording) = RecordingEngine::new();
//! sheetbridge_ffi::install_engine(Box::new(engine));
//! ```

mod cell;
mod error;
mod format;
mod handles;
mod registry;
mod text;
mod workbook;
mod worksheet;

pub use cell::*;
pub use error::*;
pub use format::*;
pub use handles::{HandleKind, PbFormat, PbWorkbook, PbWorksheet, RawHandle};
pub use registry::{install_engine, pb_set_codepage, reset};
pub use workbook::*;
pub use worksheet::*;

use std::os::raw::c_char;

/// Get a static descriptive version string.
#[no_mangle]
pub extern "system" fn pb_get_version() -> *const c_char {
    concat!("sheetbridge ", env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
