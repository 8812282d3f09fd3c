//! Guard behavior: invalid handles and null text never reach the engine.

use pretty_assertions::assert_eq;

use sheetbridge_ffi::{
    pb_workbook_add_format, pb_workbook_close, pb_workbook_new, pb_worksheet_add,
    pb_worksheet_autofilter, pb_worksheet_freeze_panes, pb_worksheet_write_number,
    pb_worksheet_write_string, reset, PbFormat, PbWorkbook, PbWorksheet, RawHandle,
    PB_ERR_BAD_HANDLE, PB_ERR_NULL_ARG,
};

use crate::common::{add_worksheet, bridge, c, open_workbook};

#[test]
fn null_worksheet_handle_is_rejected_without_engine_call() {
    let bridge = bridge();
    let text = c("hello");

    let status =
        pb_worksheet_write_string(PbWorksheet::NULL, 0, 0, text.as_ptr(), PbFormat::NULL);

    assert_eq!(status, PB_ERR_NULL_ARG);
    assert_eq!(bridge.call_count(), 0);
}

#[test]
fn null_mandatory_text_is_rejected_without_engine_call() {
    let bridge = bridge();
    let workbook = open_workbook();
    let sheet = add_worksheet(workbook);
    bridge.clear_recording();

    let status = pb_worksheet_write_string(sheet, 0, 0, std::ptr::null(), PbFormat::NULL);

    assert_eq!(status, PB_ERR_NULL_ARG);
    assert_eq!(bridge.call_count(), 0);
}

#[test]
fn null_path_yields_null_workbook_handle() {
    let _bridge = bridge();
    assert!(pb_workbook_new(std::ptr::null()).is_null());
}

#[test]
fn workbook_handle_is_not_accepted_as_a_worksheet() {
    let bridge = bridge();
    let workbook = open_workbook();
    bridge.clear_recording();

    // Same bits, wrong resource kind.
    let forged = PbWorksheet::from_raw(workbook.raw());
    let status = pb_worksheet_write_number(forged, 0, 0, 1.0, PbFormat::NULL);

    assert_eq!(status, PB_ERR_BAD_HANDLE);
    assert_eq!(bridge.call_count(), 0);
}

#[test]
fn worksheet_handle_is_not_accepted_as_a_format_owner() {
    let bridge = bridge();
    let workbook = open_workbook();
    let sheet = add_worksheet(workbook);
    bridge.clear_recording();

    let forged = PbWorkbook::from_raw(sheet.raw());
    assert!(pb_workbook_add_format(forged).is_null());
    assert_eq!(bridge.call_count(), 0);
}

#[test]
fn garbage_handle_bits_are_rejected() {
    let bridge = bridge();

    let forged = PbWorksheet::from_raw(RawHandle::from_u64(u64::MAX));
    let status = pb_worksheet_freeze_panes(forged, 1, 1);

    assert_eq!(status, PB_ERR_BAD_HANDLE);
    assert_eq!(bridge.call_count(), 0);
}

#[test]
fn never_issued_handle_is_rejected() {
    let bridge = bridge();
    let workbook = open_workbook();
    let sheet = add_worksheet(workbook);
    bridge.clear_recording();

    // Valid kind bits, but a slot the bridge never handed out.
    let forged = PbWorksheet::from_raw(RawHandle::from_u64(sheet.raw().as_u64() + 1));
    let status = pb_worksheet_autofilter(forged, 0, 0, 9, 3);

    assert_eq!(status, PB_ERR_BAD_HANDLE);
    assert_eq!(bridge.call_count(), 0);
}

#[test]
fn reset_drops_the_engine_and_kills_all_handles() {
    let _bridge = bridge();
    let workbook = open_workbook();

    reset();

    let path = c("other.xlsx");
    assert!(pb_workbook_new(path.as_ptr()).is_null());
    assert!(pb_worksheet_add(workbook, std::ptr::null()).is_null());
    // The workbook handle itself died with the reset.
    assert_eq!(pb_workbook_close(workbook), PB_ERR_BAD_HANDLE);
}
