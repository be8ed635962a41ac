//! C-compatible API for hosts binding through a foreign-function linker
//! instead of JNI.
//!
//! Ownership rules: strings returned by `nativecalc_system_info` belong to the
//! caller and go back through `nativecalc_free_str`. `nativecalc_strerror`
//! returns static strings that must not be freed. Array input is borrowed for
//! the call only; output goes into a caller-owned buffer.

use std::ffi::{c_char, CString};
use std::slice;

use crate::common::error::{CalcCode, CalcError, CalcResult};
use crate::sysinfo::{UnameProbe, FALLBACK_REPORT};

use super::{calculator, factorial_or_sentinel, API_VERSION};

/// ABI version to coordinate with the host.
#[no_mangle]
pub extern "C" fn nativecalc_api_version() -> u32 {
    API_VERSION
}

#[no_mangle]
pub extern "C" fn nativecalc_add(a: i32, b: i32) -> i32 {
    calculator().add(a, b)
}

#[no_mangle]
pub extern "C" fn nativecalc_multiply(a: f64, b: f64) -> f64 {
    calculator().multiply(a, b)
}

/// `n!`, or `-1` when `n` is negative.
#[no_mangle]
pub extern "C" fn nativecalc_factorial(n: i32) -> i64 {
    factorial_or_sentinel(n)
}

#[no_mangle]
pub extern "C" fn nativecalc_is_prime(n: i32) -> bool {
    calculator().is_prime(n)
}

/// System report as a NUL-terminated string (caller must free).
#[no_mangle]
pub extern "C" fn nativecalc_system_info() -> *const c_char {
    string_to_raw(calculator().system_info(&UnameProbe))
}

/// Free strings allocated by this library.
///
/// # Safety
///
/// `ptr` must be null or a pointer previously returned by
/// `nativecalc_system_info` that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn nativecalc_free_str(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    drop(CString::from_raw(ptr as *mut c_char));
}

/// Square `len` elements of `input` into `output`, returning a `CalcCode`.
///
/// # Safety
///
/// When `len > 0`, `input` must be valid for `len` reads and `output` valid
/// for `len` writes, and the two regions must not overlap.
#[no_mangle]
pub unsafe extern "C" fn nativecalc_process_array(
    input: *const i32,
    len: usize,
    output: *mut i32,
) -> u32 {
    match process_into(input, len, output) {
        Ok(()) => CalcCode::Ok as u32,
        Err(err) => {
            tracing::warn!(code = err.code() as u32, %err, "nativecalc_process_array failed");
            err.code() as u32
        }
    }
}

/// Static description of a status code. Never free the result.
#[no_mangle]
pub extern "C" fn nativecalc_strerror(code: u32) -> *const c_char {
    let text: &'static [u8] = match CalcCode::from_raw(code) {
        Some(CalcCode::Ok) => b"ok\0",
        Some(CalcCode::InvalidInput) => b"invalid input\0",
        Some(CalcCode::HostQuery) => b"unable to query the host system\0",
        Some(CalcCode::OutOfMemory) => b"out of memory\0",
        Some(CalcCode::Internal) => b"internal error\0",
        None => b"unknown error\0",
    };
    text.as_ptr().cast()
}

unsafe fn process_into(input: *const i32, len: usize, output: *mut i32) -> CalcResult<()> {
    if len == 0 {
        return Ok(());
    }
    if input.is_null() || output.is_null() {
        return Err(CalcError::InvalidPointer);
    }

    let squared = {
        // SAFETY: upheld by the caller per the function contract.
        let borrowed = slice::from_raw_parts(input, len);
        calculator().process_array(borrowed)?
    };
    // SAFETY: upheld by the caller per the function contract.
    let out = slice::from_raw_parts_mut(output, len);
    out.copy_from_slice(&squared);
    Ok(())
}

fn string_to_raw(s: String) -> *const c_char {
    match CString::new(s) {
        Ok(cstring) => cstring.into_raw(),
        Err(_) => fallback_raw(),
    }
}

fn fallback_raw() -> *const c_char {
    CString::new(FALLBACK_REPORT)
        .map(|c| c.into_raw() as *const c_char)
        .unwrap_or(std::ptr::null())
}
