// C ABI for host front ends. Every call answers with a JSON string that the
// host must release through `gematria_free_string`; panics are caught at
// the boundary.
use crate::error::{GematriaError, Result};
use crate::{GematriaEngine, Scheme};
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use tracing::{error, warn};

unsafe fn str_arg<'a>(ptr: *const c_char, name: &'static str) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(GematriaError::NullArgument(name));
    }
    CStr::from_ptr(ptr).to_str().map_err(|_| GematriaError::InvalidUtf8(name))
}

fn error_json(err: &GematriaError) -> String {
    serde_json::json!({ "error": err.to_string() }).to_string()
}

fn into_c_string(json: String) -> *mut c_char {
    match CString::new(json) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            error!("[c_api] response contained a NUL byte: {}", e);
            ptr::null_mut()
        }
    }
}

/// Runs `f` against the session behind `handle`, turning errors and panics
/// into a JSON error object.
unsafe fn with_session<F>(handle: *mut GematriaEngine, f: F) -> *mut c_char
where
    F: FnOnce(&mut GematriaEngine) -> Result<String>,
{
    let result = catch_unwind(AssertUnwindSafe(|| match handle.as_mut() {
        Some(engine) => f(engine),
        None => Err(GematriaError::NullArgument("session")),
    }));
    let json = match result {
        Ok(Ok(json)) => json,
        Ok(Err(e)) => {
            warn!("[c_api] {}", e);
            error_json(&e)
        }
        Err(_) => {
            error!("[c_api] panic inside gematria call");
            serde_json::json!({ "error": "internal panic" }).to_string()
        }
    };
    into_c_string(json)
}

/// Creates an independent session with its own recent-results log.
#[no_mangle]
pub extern "C" fn gematria_session_new() -> *mut GematriaEngine {
    match catch_unwind(GematriaEngine::new) {
        Ok(engine) => Box::into_raw(Box::new(engine)),
        Err(_) => {
            error!("[c_api] panic while creating session");
            ptr::null_mut()
        }
    }
}

/// # Safety
/// `handle` must come from `gematria_session_new` and not be freed twice.
#[no_mangle]
pub unsafe extern "C" fn gematria_session_free(handle: *mut GematriaEngine) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Calculates `text` under `lang` (`hebrew` / `english`), records it in the
/// session log and returns the JSON report.
///
/// # Safety
/// `handle` must be a live session; `lang` and `text` must be NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn gematria_calculate(
    handle: *mut GematriaEngine,
    lang: *const c_char,
    text: *const c_char,
) -> *mut c_char {
    with_session(handle, |engine| {
        let scheme: Scheme = str_arg(lang, "lang")?.parse()?;
        let text = str_arg(text, "text")?;
        Ok(serde_json::to_string(&engine.calculate(scheme, text))?)
    })
}

/// Returns the session's recent calculations as a JSON array.
///
/// # Safety
/// `handle` must be a live session.
#[no_mangle]
pub unsafe extern "C" fn gematria_recent(handle: *mut GematriaEngine) -> *mut c_char {
    with_session(handle, |engine| Ok(serde_json::to_string(&engine.recent())?))
}

/// # Safety
/// `s` must be a string returned by this library, freed at most once.
#[no_mangle]
pub unsafe extern "C" fn gematria_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
