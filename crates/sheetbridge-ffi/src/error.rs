//! Bridge sentinel codes.
//!
//! Engine statuses pass through the bridge unchanged; these constants are the
//! bridge's own guard-failure channel. They are all negative so they can never
//! collide with an engine success status, and they never reach the engine.

use std::os::raw::{c_char, c_int};

/// Success (also the conventional engine success status).
pub const PB_OK: c_int = 0;

/// A mandatory pointer or handle argument was null, or a count was negative.
pub const PB_ERR_NULL_ARG: c_int = -1;

/// A handle was stale (owning workbook closed), of the wrong resource kind,
/// or never issued by this bridge.
pub const PB_ERR_BAD_HANDLE: c_int = -2;

/// No engine has been installed by the embedding application.
pub const PB_ERR_NO_ENGINE: c_int = -3;

/// Legacy text could not be decoded under the active code page.
pub const PB_ERR_ENCODING: c_int = -4;

/// Bridge-internal failure (registry lock poisoned).
pub const PB_ERR_INTERNAL: c_int = -5;

/// An argument was present but its value is out of range (e.g. a code page
/// number outside 0..=65535).
pub const PB_ERR_BAD_ARG: c_int = -6;

/// Get a static message for a bridge sentinel code.
#[no_mangle]
pub extern "system" fn pb_error_message(code: c_int) -> *const c_char {
    let msg: &'static [u8] = match code {
        PB_OK => b"Success\0",
        PB_ERR_NULL_ARG => b"Null or missing argument\0",
        PB_ERR_BAD_HANDLE => b"Stale or mistyped handle\0",
        PB_ERR_NO_ENGINE => b"No spreadsheet engine installed\0",
        PB_ERR_ENCODING => b"Text not valid for the active code page\0",
        PB_ERR_INTERNAL => b"Internal bridge error\0",
        PB_ERR_BAD_ARG => b"Argument value out of range\0",
        _ => b"Unknown error\0",
    };

    msg.as_ptr() as *const c_char
}
