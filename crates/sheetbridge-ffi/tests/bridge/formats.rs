//! Format setters: forwarding, forgiving null handling, idempotence.

use pretty_assertions::assert_eq;

use sheetbridge_engine::testing::Call;
use sheetbridge_engine::{BorderLine, CellAlign};
use sheetbridge_ffi::{
    pb_format_set_align, pb_format_set_bg_color, pb_format_set_bold, pb_format_set_border,
    pb_format_set_font_color, pb_format_set_font_size, pb_format_set_italic,
    pb_format_set_num_format, pb_format_set_text_wrap, pb_worksheet_set_column, PbFormat, PB_OK,
};

use crate::common::{add_format, add_worksheet, bridge, c, open_workbook};

#[test]
fn setters_forward_to_the_engine() {
    let bridge = bridge();
    let workbook = open_workbook();
    let format = add_format(workbook);
    bridge.clear_recording();

    pb_format_set_bold(format);
    pb_format_set_italic(format);
    pb_format_set_text_wrap(format);
    pb_format_set_font_size(format, 14);
    pb_format_set_font_color(format, 0x0000_FF00);
    pb_format_set_bg_color(format, 0x00FF_0000);
    pb_format_set_align(format, 2);
    pb_format_set_border(format, 1);
    let pattern = c("#,##0.00");
    pb_format_set_num_format(format, pattern.as_ptr());

    match &bridge.calls()[..] {
        [Call::SetBold { .. }, Call::SetItalic { .. }, Call::SetTextWrap { .. }, Call::SetFontSize { size, .. }, Call::SetFontColor { rgb: font_rgb, .. }, Call::SetBgColor { rgb: bg_rgb, .. }, Call::SetAlign { align, .. }, Call::SetBorder { line, .. }, Call::SetNumFormat { pattern, .. }] =>
        {
            assert_eq!(*size, 14.0);
            assert_eq!(*font_rgb, 0x0000_FF00);
            assert_eq!(*bg_rgb, 0x00FF_0000);
            assert_eq!(*align, CellAlign::Center);
            assert_eq!(*line, BorderLine::Thin);
            assert_eq!(pattern, "#,##0.00");
        }
        calls => panic!("unexpected calls: {calls:?}"),
    }
}

#[test]
fn setting_bold_twice_is_idempotent_forwarding() {
    let bridge = bridge();
    let workbook = open_workbook();
    let format = add_format(workbook);
    bridge.clear_recording();

    pb_format_set_bold(format);
    pb_format_set_bold(format);

    // The same absolute attribute is sent both times; nothing toggles.
    let calls = bridge.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[test]
fn null_format_handle_makes_setters_a_no_op() {
    let bridge = bridge();

    pb_format_set_bold(PbFormat::NULL);
    pb_format_set_font_size(PbFormat::NULL, 12);
    pb_format_set_num_format(PbFormat::NULL, std::ptr::null());

    assert_eq!(bridge.call_count(), 0);
}

#[test]
fn null_pattern_makes_num_format_a_no_op() {
    let bridge = bridge();
    let workbook = open_workbook();
    let format = add_format(workbook);
    bridge.clear_recording();

    pb_format_set_num_format(format, std::ptr::null());

    assert_eq!(bridge.call_count(), 0);
}

#[test]
fn unknown_style_codes_are_ignored() {
    let bridge = bridge();
    let workbook = open_workbook();
    let format = add_format(workbook);
    bridge.clear_recording();

    pb_format_set_align(format, 42);
    pb_format_set_border(format, -7);

    assert_eq!(bridge.call_count(), 0);
}

#[test]
fn null_optional_format_is_forwarded_as_no_format() {
    let bridge = bridge();
    let workbook = open_workbook();
    let sheet = add_worksheet(workbook);
    bridge.clear_recording();

    let status = pb_worksheet_set_column(sheet, 0, 0, 10.0, PbFormat::NULL);

    assert_eq!(status, PB_OK);
    match &bridge.calls()[..] {
        [Call::SetColumn { format, .. }] => assert_eq!(*format, None),
        calls => panic!("unexpected calls: {calls:?}"),
    }
}

#[test]
fn live_optional_format_is_forwarded_by_id() {
    let bridge = bridge();
    let workbook = open_workbook();
    let sheet = add_worksheet(workbook);
    let format = add_format(workbook);
    bridge.clear_recording();

    let status = pb_worksheet_set_column(sheet, 0, 0, 10.0, format);

    assert_eq!(status, PB_OK);
    match &bridge.calls()[..] {
        [Call::SetColumn { format, .. }] => assert!(format.is_some()),
        calls => panic!("unexpected calls: {calls:?}"),
    }
}

#[test]
fn worksheet_handle_is_not_accepted_as_a_format() {
    let bridge = bridge();
    let workbook = open_workbook();
    let sheet = add_worksheet(workbook);
    bridge.clear_recording();

    let forged = PbFormat::from_raw(sheet.raw());
    pb_format_set_bold(forged);

    assert_eq!(bridge.call_count(), 0);
}
