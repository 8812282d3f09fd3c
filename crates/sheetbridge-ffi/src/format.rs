//! Format setter FFI functions.
//!
//! All setters are void and forgiving: a null or invalid handle, an unknown
//! style code, or undecodable pattern text makes the call a no-op rather than
//! a fault. Setting an attribute twice leaves the format as if set once.

use std::os::raw::{c_char, c_int};

use sheetbridge_engine::{BorderLine, CellAlign};

use crate::handles::PbFormat;
use crate::registry::with_registry;
use crate::text;

macro_rules! flag_setter {
    ($(#[$doc:meta])* $name:ident, $method:ident) => {
        $(#[$doc])*
        #[no_mangle]
        pub extern "system" fn $name(format: PbFormat) {
            with_registry!((), |mut reg| {
                if let Ok(id) = reg.format(format) {
                    if let Ok(engine) = reg.engine() {
                        engine.$method(id);
                    }
                }
            })
        }
    };
}

flag_setter!(
    /// Make the format bold.
    pb_format_set_bold,
    set_bold
);

flag_setter!(
    /// Make the format italic.
    pb_format_set_italic,
    set_italic
);

flag_setter!(
    /// Wrap text in cells using the format.
    pb_format_set_text_wrap,
    set_text_wrap
);

/// Set the font size in points.
#[no_mangle]
pub extern "system" fn pb_format_set_font_size(format: PbFormat, size: c_int) {
    with_registry!((), |mut reg| {
        if let Ok(id) = reg.format(format) {
            if let Ok(engine) = reg.engine() {
                engine.set_font_size(id, f64::from(size));
            }
        }
    })
}

/// Set the font color as an RGB value.
#[no_mangle]
pub extern "system" fn pb_format_set_font_color(format: PbFormat, color: c_int) {
    with_registry!((), |mut reg| {
        if let Ok(id) = reg.format(format) {
            if let Ok(engine) = reg.engine() {
                engine.set_font_color(id, color as u32);
            }
        }
    })
}

/// Set the cell background color as an RGB value.
#[no_mangle]
pub extern "system" fn pb_format_set_bg_color(format: PbFormat, color: c_int) {
    with_registry!((), |mut reg| {
        if let Ok(id) = reg.format(format) {
            if let Ok(engine) = reg.engine() {
                engine.set_bg_color(id, color as u32);
            }
        }
    })
}

/// Set horizontal alignment from its host-side integer code.
#[no_mangle]
pub extern "system" fn pb_format_set_align(format: PbFormat, align: c_int) {
    let Some(align) = CellAlign::from_code(align) else {
        log::debug!("ignoring unknown alignment code {align}");
        return;
    };
    with_registry!((), |mut reg| {
        if let Ok(id) = reg.format(format) {
            if let Ok(engine) = reg.engine() {
                engine.set_align(id, align);
            }
        }
    })
}

/// Set the border line style on all four edges from its host-side code.
#[no_mangle]
pub extern "system" fn pb_format_set_border(format: PbFormat, style: c_int) {
    let Some(line) = BorderLine::from_code(style) else {
        log::debug!("ignoring unknown border style code {style}");
        return;
    };
    with_registry!((), |mut reg| {
        if let Ok(id) = reg.format(format) {
            if let Ok(engine) = reg.engine() {
                engine.set_border(id, line);
            }
        }
    })
}

/// Set the number format pattern (legacy-encoded text, e.g. `#,##0.00`).
#[no_mangle]
pub extern "system" fn pb_format_set_num_format(format: PbFormat, pattern: *const c_char) {
    let Some(bytes) = (unsafe { text::legacy_bytes(pattern) }) else {
        return;
    };
    with_registry!((), |mut reg| {
        if let Ok(id) = reg.format(format) {
            if let Ok(pattern) = reg.decode(&bytes) {
                if let Ok(engine) = reg.engine() {
                    engine.set_num_format(id, &pattern);
                }
            }
        }
    })
}
