//! Workbook FFI functions

use std::os::raw::{c_char, c_int};
use std::path::Path;

use crate::error::PB_ERR_INTERNAL;
use crate::handles::{PbFormat, PbWorkbook};
use crate::registry::with_registry;
use crate::text;

/// Create a workbook that will be written to `path` on close.
///
/// The path is legacy-encoded text, decoded under the active code page.
/// Returns the null handle on any failure (null path, undecodable path, no
/// engine, engine rejection).
#[no_mangle]
pub extern "system" fn pb_workbook_new(path: *const c_char) -> PbWorkbook {
    let Some(bytes) = (unsafe { text::legacy_bytes(path) }) else {
        log::debug!("pb_workbook_new rejected: null path");
        return PbWorkbook::NULL;
    };
    with_registry!(PbWorkbook::NULL, |mut reg| {
        let Ok(path) = reg.decode(&bytes) else {
            return PbWorkbook::NULL;
        };
        reg.open_workbook(Path::new(&path)).unwrap_or(PbWorkbook::NULL)
    })
}

/// Finalize and write out the workbook.
///
/// Every worksheet and format handle derived from the workbook is invalid
/// afterwards; using one is a guard failure, not undefined behavior. The
/// engine's close status is returned verbatim.
#[no_mangle]
pub extern "system" fn pb_workbook_close(workbook: PbWorkbook) -> c_int {
    with_registry!(PB_ERR_INTERNAL, |mut reg| reg.close_workbook(workbook))
}

/// Add an empty reusable cell format to the workbook.
///
/// Returns the null handle if the workbook handle is invalid or the engine
/// refuses.
#[no_mangle]
pub extern "system" fn pb_workbook_add_format(workbook: PbWorkbook) -> PbFormat {
    with_registry!(PbFormat::NULL, |mut reg| {
        reg.add_format(workbook).unwrap_or(PbFormat::NULL)
    })
}
