//! Worksheet and layout FFI functions

use std::os::raw::{c_char, c_int};
use std::path::Path;

use crate::error::{PB_ERR_INTERNAL, PB_ERR_NULL_ARG};
use crate::handles::{PbFormat, PbWorkbook, PbWorksheet};
use crate::registry::{try_status, with_registry};
use crate::text;

/// Default column width in character units, matching the spreadsheet
/// application default.
const DEFAULT_COL_WIDTH: f64 = 8.43;

/// Add a worksheet to the workbook.
///
/// `name` may be null, in which case the engine picks its default sheet name.
/// Returns the null handle if the workbook handle is invalid, the name cannot
/// be decoded, or the engine refuses.
#[no_mangle]
pub extern "system" fn pb_worksheet_add(workbook: PbWorkbook, name: *const c_char) -> PbWorksheet {
    let bytes = unsafe { text::legacy_bytes(name) };
    with_registry!(PbWorksheet::NULL, |mut reg| {
        let name = match &bytes {
            Some(bytes) => match reg.decode(bytes) {
                Ok(name) => Some(name),
                Err(_) => return PbWorksheet::NULL,
            },
            None => None,
        };
        reg.add_worksheet(workbook, name.as_deref())
            .unwrap_or(PbWorksheet::NULL)
    })
}

/// Set the width of a column range. `format` may be null.
#[no_mangle]
pub extern "system" fn pb_worksheet_set_column(
    worksheet: PbWorksheet,
    first_col: c_int,
    last_col: c_int,
    width: f64,
    format: PbFormat,
) -> c_int {
    with_registry!(PB_ERR_INTERNAL, |mut reg| {
        let sheet = try_status!(reg.worksheet(worksheet));
        let format = try_status!(reg.format_opt(format));
        try_status!(reg.engine()).set_column(sheet, first_col, last_col, width, format)
    })
}

/// Set the height of a row. `format` may be null.
#[no_mangle]
pub extern "system" fn pb_worksheet_set_row(
    worksheet: PbWorksheet,
    row: c_int,
    height: f64,
    format: PbFormat,
) -> c_int {
    with_registry!(PB_ERR_INTERNAL, |mut reg| {
        let sheet = try_status!(reg.worksheet(worksheet));
        let format = try_status!(reg.format_opt(format));
        try_status!(reg.engine()).set_row(sheet, row, height, format)
    })
}

/// Merge a cell range and write `text` into it. `format` may be null.
#[no_mangle]
pub extern "system" fn pb_worksheet_merge_range(
    worksheet: PbWorksheet,
    first_row: c_int,
    first_col: c_int,
    last_row: c_int,
    last_col: c_int,
    text: *const c_char,
    format: PbFormat,
) -> c_int {
    let Some(bytes) = (unsafe { text::legacy_bytes(text) }) else {
        return PB_ERR_NULL_ARG;
    };
    with_registry!(PB_ERR_INTERNAL, |mut reg| {
        let sheet = try_status!(reg.worksheet(worksheet));
        let text = try_status!(reg.decode(&bytes));
        let format = try_status!(reg.format_opt(format));
        try_status!(reg.engine()).merge_range(
            sheet, first_row, first_col, last_row, last_col, &text, format,
        )
    })
}

/// Freeze panes above `row` and left of `col`.
#[no_mangle]
pub extern "system" fn pb_worksheet_freeze_panes(
    worksheet: PbWorksheet,
    row: c_int,
    col: c_int,
) -> c_int {
    with_registry!(PB_ERR_INTERNAL, |mut reg| {
        let sheet = try_status!(reg.worksheet(worksheet));
        try_status!(reg.engine()).freeze_panes(sheet, row, col)
    })
}

/// Add an autofilter over a cell range.
#[no_mangle]
pub extern "system" fn pb_worksheet_autofilter(
    worksheet: PbWorksheet,
    first_row: c_int,
    first_col: c_int,
    last_row: c_int,
    last_col: c_int,
) -> c_int {
    with_registry!(PB_ERR_INTERNAL, |mut reg| {
        let sheet = try_status!(reg.worksheet(worksheet));
        try_status!(reg.engine()).autofilter(sheet, first_row, first_col, last_row, last_col)
    })
}

/// Best-effort column autosize from a caller-measured character count.
///
/// Non-positive `max_chars` falls back to the spreadsheet default width;
/// otherwise one character of padding is added over the content width. This is
/// a heuristic, not a font-metric measurement. `format` may be null.
#[no_mangle]
pub extern "system" fn pb_worksheet_autofit_column(
    worksheet: PbWorksheet,
    col: c_int,
    max_chars: c_int,
    format: PbFormat,
) -> c_int {
    with_registry!(PB_ERR_INTERNAL, |mut reg| {
        let sheet = try_status!(reg.worksheet(worksheet));
        let format = try_status!(reg.format_opt(format));
        try_status!(reg.engine()).set_column(sheet, col, col, autofit_width(max_chars), format)
    })
}

/// Insert an image from a file path at the given cell.
#[no_mangle]
pub extern "system" fn pb_worksheet_insert_image(
    worksheet: PbWorksheet,
    row: c_int,
    col: c_int,
    filename: *const c_char,
) -> c_int {
    let Some(bytes) = (unsafe { text::legacy_bytes(filename) }) else {
        return PB_ERR_NULL_ARG;
    };
    with_registry!(PB_ERR_INTERNAL, |mut reg| {
        let sheet = try_status!(reg.worksheet(worksheet));
        let path = try_status!(reg.decode(&bytes));
        try_status!(reg.engine()).insert_image(sheet, row, col, Path::new(&path))
    })
}

fn autofit_width(max_chars: c_int) -> f64 {
    if max_chars <= 0 {
        DEFAULT_COL_WIDTH
    } else {
        f64::from(max_chars) + 1.0
    }
}
