//! FFI interface for C++ interop
//!
//! Provides C-compatible functions for building actor snapshots.
//! All structured data is passed as JSON for simplicity and type safety.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::error::SnapshotError;
use crate::extractors::{build_snapshot, localise_summary, SnapshotRequest};

/// Result struct returned to C++
/// Both pointers are owned by Rust and must be freed via free_snapshot_result
#[repr(C)]
pub struct SnapshotResultFFI {
    /// JSON-serialized snapshot, or localised text (null-terminated)
    pub json_ptr: *mut c_char,
    /// Error message if the call failed (null-terminated), or null on success
    pub error_ptr: *mut c_char,
}

/// Build a display snapshot from a JSON request.
///
/// # Arguments
/// * `request_json` - JSON-serialized SnapshotRequest (null-terminated):
///   `{"actor": {...}, "currency": "USD", "includeProduct": true}`
///
/// # Returns
/// SnapshotResultFFI with either json_ptr set (success) or error_ptr set (failure)
///
/// # Safety
/// - `request_json` must be a valid null-terminated C string
/// - Caller must free the result via `free_snapshot_result`
#[no_mangle]
pub unsafe extern "C" fn extract_snapshot_ffi(request_json: *const c_char) -> SnapshotResultFFI {
    let request_str = match read_c_str(request_json, "Request JSON") {
        Ok(s) => s,
        Err(msg) => return make_error_result(&msg),
    };

    let request: SnapshotRequest = match serde_json::from_str(request_str) {
        Ok(r) => r,
        Err(e) => return make_error_result(&SnapshotError::InvalidJson(e).report()),
    };

    let snapshot = build_snapshot(&request.actor, &request.options);
    match serde_json::to_string(&snapshot) {
        Ok(json) => make_ok_result(json),
        Err(e) => make_error_result(&SnapshotError::Serialize(e).report()),
    }
}

/// Rewrite links in an actor summary relative to the actor's origin.
///
/// # Safety
/// - All three pointers must be valid null-terminated C strings;
///   `link_class` may be null for no class
/// - Caller must free the result via `free_snapshot_result`
#[no_mangle]
pub unsafe extern "C" fn localise_summary_ffi(
    summary: *const c_char,
    actor_url: *const c_char,
    link_class: *const c_char,
) -> SnapshotResultFFI {
    let summary = match read_c_str(summary, "Summary") {
        Ok(s) => s,
        Err(msg) => return make_error_result(&msg),
    };
    let actor_url = match read_c_str(actor_url, "Actor URL") {
        Ok(s) => s,
        Err(msg) => return make_error_result(&msg),
    };
    let link_class = if link_class.is_null() {
        ""
    } else {
        match read_c_str(link_class, "Link class") {
            Ok(s) => s,
            Err(msg) => return make_error_result(&msg),
        }
    };

    match localise_summary(summary, actor_url, link_class) {
        Ok(text) => make_ok_result(text),
        Err(e) => make_error_result(&e.report()),
    }
}

/// Free a SnapshotResultFFI returned by this module
///
/// # Safety
/// - `result` must have been returned by one of the `*_ffi` functions
/// - Must only be called once per result
#[no_mangle]
pub unsafe extern "C" fn free_snapshot_result(result: SnapshotResultFFI) {
    if !result.json_ptr.is_null() {
        drop(CString::from_raw(result.json_ptr));
    }
    if !result.error_ptr.is_null() {
        drop(CString::from_raw(result.error_ptr));
    }
}

unsafe fn read_c_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str, String> {
    if ptr.is_null() {
        return Err(format!("{} is null", what));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| format!("Invalid UTF-8 in {}", what.to_lowercase()))
}

fn make_ok_result(text: String) -> SnapshotResultFFI {
    match CString::new(text) {
        Ok(cstr) => SnapshotResultFFI {
            json_ptr: cstr.into_raw(),
            error_ptr: ptr::null_mut(),
        },
        Err(_) => make_error_result("Result contains null bytes"),
    }
}

// Helper to create error result
fn make_error_result(msg: &str) -> SnapshotResultFFI {
    let error_cstr = CString::new(msg).unwrap_or_else(|_| c"Unknown error".to_owned());
    SnapshotResultFFI {
        json_ptr: ptr::null_mut(),
        error_ptr: error_cstr.into_raw(),
    }
}
