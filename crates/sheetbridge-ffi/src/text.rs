//! Reading legacy text arguments out of caller memory.

use std::ffi::CStr;
use std::os::raw::c_char;

/// Copy a NUL-terminated legacy string out of caller memory.
///
/// Returns `None` for a null pointer so callers can decide whether the
/// argument was mandatory. The copy is taken up front; nothing retains the
/// caller's pointer past the call.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated buffer that stays valid for
/// the duration of the call.
pub(crate) unsafe fn legacy_bytes(ptr: *const c_char) -> Option<Vec<u8>> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_bytes().to_vec())
}
