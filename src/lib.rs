//! pyogi — renders a parsed score into Pyogi staff-based vector notation.
//!
//! The input is a [`Score`]: an ordered list of voices, each an ordered
//! list of `(degree, time, accidental)` notes, typically produced by an
//! external ingestion step and handed over as JSON.
//!
//! # Example
//! ```
//! use pyogi::{render_score_to_svg, Accidental, Note, RenderOptions, Score, Voice};
//!
//! let score = Score {
//!     voices: vec![Voice::new(vec![
//!         Note { degree: 0, time: 0.0, accidental: Accidental::Natural },
//!         Note { degree: 6, time: 1.0, accidental: Accidental::Sharp },
//!     ])],
//! };
//! let svg = render_score_to_svg(&score, &RenderOptions::default()).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod error;
pub mod model;
pub mod renderer;

pub use error::{RenderError, Result};
pub use model::*;
pub use renderer::{render_score_to_svg, AccidentalPolicy, RenderOptions};

/// Parse a score from its JSON hand-off form.
pub fn score_from_json(json: &str) -> std::result::Result<Score, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid score JSON: {e}"))
}

/// Convert a score to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn score_to_json(score: &Score) -> std::result::Result<String, String> {
    serde_json::to_string_pretty(score).map_err(|e| format!("JSON serialization error: {e}"))
}

/// Parse a JSON score and render it directly to SVG.
/// Convenience function combining deserialization and rendering.
pub fn render_json_to_svg(
    json: &str,
    options: &RenderOptions,
) -> std::result::Result<String, String> {
    let score = score_from_json(json)?;
    render_score_to_svg(&score, options).map_err(|e| e.to_string())
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for host shells that upload scores and serve the rendered SVG
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render a JSON-encoded score and return SVG as a C string, or null on
/// any failure. The caller must free the returned string with
/// `pyogi_free_string`.
///
/// `skip_unknown_accidentals` selects [`AccidentalPolicy::Skip`] when
/// nonzero; the default is strict failure.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn pyogi_render_json(
    json: *const c_char,
    skip_unknown_accidentals: i32,
) -> *mut c_char {
    if json.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(json) };
    let json_str = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let options = RenderOptions {
        accidental_policy: if skip_unknown_accidentals != 0 {
            AccidentalPolicy::Skip
        } else {
            AccidentalPolicy::Strict
        },
        ..RenderOptions::default()
    };

    match render_json_to_svg(json_str, &options) {
        Ok(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by pyogi functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a pyogi function, or null.
#[no_mangle]
pub unsafe extern "C" fn pyogi_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
