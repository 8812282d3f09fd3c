//! Handle lifecycle: close invalidates a workbook and everything it owns.

use pretty_assertions::assert_eq;

use sheetbridge_engine::testing::Call;
use sheetbridge_ffi::{
    pb_format_set_bold, pb_workbook_close, pb_worksheet_write_number, pb_worksheet_write_string,
    PbFormat, PB_ERR_BAD_HANDLE, PB_OK,
};

use crate::common::{add_format, add_worksheet, bridge, bridge_with_status, c, open_workbook};

#[test]
fn close_forwards_the_engine_status() {
    let bridge = bridge_with_status(3);
    let workbook = open_workbook();
    bridge.clear_recording();

    assert_eq!(pb_workbook_close(workbook), 3);
    match &bridge.calls()[..] {
        [Call::WorkbookClose { .. }] => {}
        calls => panic!("unexpected calls: {calls:?}"),
    }
}

#[test]
fn closing_twice_is_a_guard_failure() {
    let bridge = bridge();
    let workbook = open_workbook();

    assert_eq!(pb_workbook_close(workbook), PB_OK);
    bridge.clear_recording();

    assert_eq!(pb_workbook_close(workbook), PB_ERR_BAD_HANDLE);
    assert_eq!(bridge.call_count(), 0);
}

#[test]
fn worksheet_handles_die_with_their_workbook() {
    let bridge = bridge();
    let workbook = open_workbook();
    let sheet = add_worksheet(workbook);
    assert_eq!(pb_workbook_close(workbook), PB_OK);
    bridge.clear_recording();

    let text = c("late write");
    let status = pb_worksheet_write_string(sheet, 0, 0, text.as_ptr(), PbFormat::NULL);

    assert_eq!(status, PB_ERR_BAD_HANDLE);
    assert_eq!(bridge.call_count(), 0);
}

#[test]
fn format_handles_die_with_their_workbook() {
    let bridge = bridge();
    let workbook = open_workbook();
    let format = add_format(workbook);
    assert_eq!(pb_workbook_close(workbook), PB_OK);
    bridge.clear_recording();

    pb_format_set_bold(format);

    assert_eq!(bridge.call_count(), 0);
}

#[test]
fn closing_one_workbook_leaves_another_alive() {
    let bridge = bridge();
    let first = open_workbook();
    let second = open_workbook();
    let first_sheet = add_worksheet(first);
    let second_sheet = add_worksheet(second);

    assert_eq!(pb_workbook_close(first), PB_OK);
    bridge.clear_recording();

    assert_eq!(
        pb_worksheet_write_number(first_sheet, 0, 0, 1.0, PbFormat::NULL),
        PB_ERR_BAD_HANDLE
    );
    assert_eq!(
        pb_worksheet_write_number(second_sheet, 0, 0, 1.0, PbFormat::NULL),
        PB_OK
    );
    assert_eq!(bridge.call_count(), 1);
}

#[test]
fn reused_slots_do_not_resurrect_old_handles() {
    let bridge = bridge();
    let first = open_workbook();
    let first_sheet = add_worksheet(first);
    assert_eq!(pb_workbook_close(first), PB_OK);

    // New resources may reuse the freed slots; stale handles must stay dead.
    let second = open_workbook();
    let second_sheet = add_worksheet(second);
    bridge.clear_recording();

    assert_eq!(
        pb_worksheet_write_number(first_sheet, 0, 0, 1.0, PbFormat::NULL),
        PB_ERR_BAD_HANDLE
    );
    assert_eq!(pb_workbook_close(first), PB_ERR_BAD_HANDLE);
    assert_eq!(bridge.call_count(), 0);

    assert_eq!(
        pb_worksheet_write_number(second_sheet, 0, 0, 1.0, PbFormat::NULL),
        PB_OK
    );
}
