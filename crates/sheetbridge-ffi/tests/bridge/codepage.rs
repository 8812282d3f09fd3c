//! Code page configuration and diagnostics.

use std::ffi::{CStr, CString};

use pretty_assertions::assert_eq;

use sheetbridge_ffi::{
    pb_error_message, pb_get_version, pb_set_codepage, pb_worksheet_write_string, PbFormat,
    PB_ERR_BAD_ARG, PB_ERR_ENCODING, PB_ERR_NULL_ARG, PB_OK,
};

use crate::common::{add_worksheet, bridge, open_workbook};

#[test]
fn default_code_page_is_windows_1252() {
    let bridge = bridge();
    let workbook = open_workbook();
    let sheet = add_worksheet(workbook);
    bridge.clear_recording();

    // 0xC9 is É in windows-1252.
    let text = CString::new(&b"\xc9t\xe9"[..]).unwrap();
    assert_eq!(
        pb_worksheet_write_string(sheet, 0, 0, text.as_ptr(), PbFormat::NULL),
        PB_OK
    );
    assert_eq!(bridge.string_writes(), vec![(0, 0, "Été".to_owned())]);
}

#[test]
fn switching_code_pages_changes_decoding() {
    let bridge = bridge();
    let workbook = open_workbook();
    let sheet = add_worksheet(workbook);
    bridge.clear_recording();

    assert_eq!(pb_set_codepage(1250), PB_OK);

    // 0xB3 is ł in windows-1250 (but ³ in windows-1252).
    let text = CString::new(&b"z\xb3oty"[..]).unwrap();
    assert_eq!(
        pb_worksheet_write_string(sheet, 0, 0, text.as_ptr(), PbFormat::NULL),
        PB_OK
    );
    assert_eq!(bridge.string_writes(), vec![(0, 0, "złoty".to_owned())]);
}

#[test]
fn out_of_range_code_page_is_rejected_as_a_bad_argument() {
    let _bridge = bridge();
    assert_eq!(pb_set_codepage(-1), PB_ERR_BAD_ARG);
    assert_eq!(pb_set_codepage(70000), PB_ERR_BAD_ARG);

    let message = unsafe { CStr::from_ptr(pb_error_message(PB_ERR_BAD_ARG)) }
        .to_str()
        .unwrap();
    assert_eq!(message, "Argument value out of range");
}

#[test]
fn undecodable_text_is_a_bridge_error_not_an_engine_call() {
    let bridge = bridge();
    let workbook = open_workbook();
    let sheet = add_worksheet(workbook);
    bridge.clear_recording();

    assert_eq!(pb_set_codepage(932), PB_OK);

    // Lone Shift-JIS lead byte: undecodable.
    let text = CString::new(&b"\x88"[..]).unwrap();
    assert_eq!(
        pb_worksheet_write_string(sheet, 0, 0, text.as_ptr(), PbFormat::NULL),
        PB_ERR_ENCODING
    );
    assert_eq!(bridge.call_count(), 0);
}

#[test]
fn version_string_is_static_and_descriptive() {
    let version = unsafe { CStr::from_ptr(pb_get_version()) }.to_str().unwrap();
    assert!(version.starts_with("sheetbridge "));
}

#[test]
fn error_messages_cover_the_sentinels() {
    let ok = unsafe { CStr::from_ptr(pb_error_message(PB_OK)) }.to_str().unwrap();
    let null_arg = unsafe { CStr::from_ptr(pb_error_message(PB_ERR_NULL_ARG)) }
        .to_str()
        .unwrap();
    assert_eq!(ok, "Success");
    assert_eq!(null_arg, "Null or missing argument");
}
