//! Cell write FFI functions

use std::os::raw::{c_char, c_int};

use sheetbridge_engine::{DateTime, ENGINE_OK};

use crate::error::{PB_ERR_INTERNAL, PB_ERR_NULL_ARG, PB_OK};
use crate::handles::{PbFormat, PbWorksheet};
use crate::registry::{try_status, with_registry};
use crate::text;

/// Write legacy-encoded text to a cell. `format` may be null.
#[no_mangle]
pub extern "system" fn pb_worksheet_write_string(
    worksheet: PbWorksheet,
    row: c_int,
    col: c_int,
    value: *const c_char,
    format: PbFormat,
) -> c_int {
    let Some(bytes) = (unsafe { text::legacy_bytes(value) }) else {
        return PB_ERR_NULL_ARG;
    };
    with_registry!(PB_ERR_INTERNAL, |mut reg| {
        let sheet = try_status!(reg.worksheet(worksheet));
        let value = try_status!(reg.decode(&bytes));
        let format = try_status!(reg.format_opt(format));
        try_status!(reg.engine()).write_string(sheet, row, col, &value, format)
    })
}

/// Write a number to a cell. `format` may be null.
#[no_mangle]
pub extern "system" fn pb_worksheet_write_number(
    worksheet: PbWorksheet,
    row: c_int,
    col: c_int,
    value: f64,
    format: PbFormat,
) -> c_int {
    with_registry!(PB_ERR_INTERNAL, |mut reg| {
        let sheet = try_status!(reg.worksheet(worksheet));
        let format = try_status!(reg.format_opt(format));
        try_status!(reg.engine()).write_number(sheet, row, col, value, format)
    })
}

/// Write a formula to a cell. `format` may be null.
#[no_mangle]
pub extern "system" fn pb_worksheet_write_formula(
    worksheet: PbWorksheet,
    row: c_int,
    col: c_int,
    formula: *const c_char,
    format: PbFormat,
) -> c_int {
    let Some(bytes) = (unsafe { text::legacy_bytes(formula) }) else {
        return PB_ERR_NULL_ARG;
    };
    with_registry!(PB_ERR_INTERNAL, |mut reg| {
        let sheet = try_status!(reg.worksheet(worksheet));
        let formula = try_status!(reg.decode(&bytes));
        let format = try_status!(reg.format_opt(format));
        try_status!(reg.engine()).write_formula(sheet, row, col, &formula, format)
    })
}

/// Write a broken-down date/time to a cell. `format` may be null.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub extern "system" fn pb_worksheet_write_datetime(
    worksheet: PbWorksheet,
    row: c_int,
    col: c_int,
    year: c_int,
    month: c_int,
    day: c_int,
    hour: c_int,
    min: c_int,
    sec: f64,
    format: PbFormat,
) -> c_int {
    with_registry!(PB_ERR_INTERNAL, |mut reg| {
        let sheet = try_status!(reg.worksheet(worksheet));
        let format = try_status!(reg.format_opt(format));
        let value = DateTime::new(year, month, day, hour, min, sec);
        try_status!(reg.engine()).write_datetime(sheet, row, col, value, format)
    })
}

/// Write one row of text values with per-column visibility.
///
/// `values` and `visible` are parallel arrays of length `count`; `formats` is
/// an optional parallel array (null means no per-cell formats, and individual
/// entries may also be null). Positions whose visibility flag is zero are
/// skipped, and the surviving values land in consecutive columns starting at
/// column 0, so hiding a source column shifts everything after it left. That
/// compaction is the contract the legacy host relies on.
///
/// The first non-zero engine status aborts the batch and is returned verbatim.
#[no_mangle]
pub extern "system" fn pb_worksheet_write_row(
    worksheet: PbWorksheet,
    row: c_int,
    values: *const *const c_char,
    visible: *const c_int,
    formats: *const PbFormat,
    count: c_int,
) -> c_int {
    if values.is_null() || visible.is_null() || count < 0 {
        return PB_ERR_NULL_ARG;
    }
    let count = count as usize;
    with_registry!(PB_ERR_INTERNAL, |mut reg| {
        let sheet = try_status!(reg.worksheet(worksheet));
        let mut out_col: c_int = 0;
        for i in 0..count {
            if unsafe { *visible.add(i) } == 0 {
                continue;
            }
            let Some(bytes) = (unsafe { text::legacy_bytes(*values.add(i)) }) else {
                return PB_ERR_NULL_ARG;
            };
            let value = try_status!(reg.decode(&bytes));
            let format = if formats.is_null() {
                None
            } else {
                try_status!(reg.format_opt(unsafe { *formats.add(i) }))
            };
            let status =
                try_status!(reg.engine()).write_string(sheet, row, out_col, &value, format);
            if status != ENGINE_OK {
                return status;
            }
            out_col += 1;
        }
        PB_OK
    })
}
